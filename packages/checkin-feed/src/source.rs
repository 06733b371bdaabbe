// Infrastructure seam between the feed store and the transport.
//
// The store only needs "give me the raw entries of the first timeline
// page"; everything else (XRPC details, page size) lives behind this
// trait so the pipeline is testable without a network.

use async_trait::async_trait;
use serde_json::Value;

use bsky_client::{BskyClient, Session, DEFAULT_TIMELINE_LIMIT};

use crate::error::FetchError;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw entries of the first timeline page.
    async fn fetch_timeline(&self, session: &Session) -> Result<Vec<Value>, FetchError>;
}

#[async_trait]
impl<S: FeedSource + ?Sized> FeedSource for std::sync::Arc<S> {
    async fn fetch_timeline(&self, session: &Session) -> Result<Vec<Value>, FetchError> {
        (**self).fetch_timeline(session).await
    }
}

/// Production feed source backed by the XRPC client.
pub struct BskyFeedSource {
    client: BskyClient,
    limit: u32,
}

impl BskyFeedSource {
    pub fn new(client: BskyClient) -> Self {
        Self {
            client,
            limit: DEFAULT_TIMELINE_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl FeedSource for BskyFeedSource {
    async fn fetch_timeline(&self, session: &Session) -> Result<Vec<Value>, FetchError> {
        let response = self.client.get_timeline(session, self.limit).await?;
        Ok(response.feed)
    }
}
