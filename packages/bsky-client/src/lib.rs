//! Pure AT Protocol (Bluesky) XRPC client.
//!
//! A minimal client for the small slice of XRPC the feed pipeline needs:
//! fetching a page of the authenticated timeline. Sessions are created
//! elsewhere (the login flow) and handed in as opaque credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use bsky_client::{BskyClient, Session};
//!
//! let client = BskyClient::new("https://bsky.social");
//!
//! let timeline = client.get_timeline(&session, 50).await?;
//! for entry in &timeline.feed {
//!     println!("{entry}");
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{BskyError, Result};
pub use types::{AuthorView, FeedViewPost, PostView, Session, TimelineResponse};

use serde::de::DeserializeOwned;

/// Default page size for timeline requests.
pub const DEFAULT_TIMELINE_LIMIT: u32 = 50;

pub struct BskyClient {
    client: reqwest::Client,
    service: String,
}

impl BskyClient {
    /// Create a client for the given PDS base URL (e.g. `https://bsky.social`).
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            service: service.into(),
        }
    }

    /// Fetch one page of the authenticated timeline
    /// (`app.bsky.feed.getTimeline`).
    pub async fn get_timeline(&self, session: &Session, limit: u32) -> Result<TimelineResponse> {
        let url = format!("{}/xrpc/app.bsky.feed.getTimeline", self.service);
        tracing::debug!(handle = %session.handle, limit, "fetching timeline");
        self.get_authed(&url, session, &[("limit", limit.to_string())])
            .await
    }

    async fn get_authed<T: DeserializeOwned>(
        &self,
        url: &str,
        session: &Session,
        query: &[(&str, String)],
    ) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&session.access_jwt)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BskyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| BskyError::Parse(e.to_string()))
    }
}
