//! Transport error types.

use thiserror::Error;

/// Error type for transport operations.
///
/// These are the failures the layer above classifies as upstream errors.
/// Auth rejections are not errors at this layer; they arrive as ordinary
/// responses (401/403 or a login redirect) and are interpreted upstream.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Could not reach the portal at all.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value could not be constructed (e.g. a session token
    /// containing control characters).
    #[error("Invalid header value: {0}")]
    Header(String),

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else {
            FetchError::Http(err)
        }
    }
}
