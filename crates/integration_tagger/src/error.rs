//! Tagger error types

use thiserror::Error;

/// Errors that can occur while tagging text
#[derive(Debug, Error)]
pub enum TaggerError {
    /// Connection to the tagger failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// A response line did not have the `<token> <tag>` shape
    #[error("Malformed tagger line {line}: {content:?}")]
    MalformedLine {
        /// One-based line number
        line: usize,
        /// Offending content
        content: String,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl TaggerError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }
}
