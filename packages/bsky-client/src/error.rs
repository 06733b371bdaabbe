//! Error types for the Bluesky client.

use thiserror::Error;

/// Result type for Bluesky client operations.
pub type Result<T> = std::result::Result<T, BskyError>;

/// Bluesky XRPC client errors.
#[derive(Debug, Error)]
pub enum BskyError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response from the XRPC endpoint)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (response body is not the expected shape)
    #[error("Parse error: {0}")]
    Parse(String),
}
