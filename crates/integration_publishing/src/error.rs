//! Publishing error types

use thiserror::Error;

/// Errors that can occur while fetching images or publishing posts
#[derive(Debug, Error)]
pub enum PublishingError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The cutout service returned something other than an image
    #[error("Not an image: {0}")]
    NotAnImage(String),

    /// The blog response could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Credentials were rejected
    #[error("Unauthorized")]
    Unauthorized,

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PublishingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    pub(crate) fn from_send(e: &reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
