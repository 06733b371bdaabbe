//! Error types for feed retrieval.
//!
//! Only fetch-level failures appear here. Per-entry malformation is
//! absorbed by the normalizer and never reaches the observable state.

use thiserror::Error;

use bsky_client::BskyError;

/// Fetch-level failures published through `FeedFetchState::Failed`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response from the feed endpoint)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The top-level payload is not a valid feed response
    #[error("Invalid feed response: {0}")]
    Envelope(String),

    /// The fetch was canceled before completing
    #[error("Fetch canceled")]
    Cancelled,
}

impl From<BskyError> for FetchError {
    fn from(err: BskyError) -> Self {
        match err {
            BskyError::Network(e) => FetchError::Network(e.to_string()),
            BskyError::Api { status, message } => FetchError::Api { status, message },
            BskyError::Parse(msg) => FetchError::Envelope(msg),
        }
    }
}
