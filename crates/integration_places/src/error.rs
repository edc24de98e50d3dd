//! Places error types

use thiserror::Error;

/// Errors that can occur during place lookups
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the places service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with an error status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request quota is exhausted
    #[error("Places quota exceeded")]
    QuotaExceeded,

    /// The API key was rejected
    #[error("Request denied: {0}")]
    RequestDenied(String),

    /// No place matches the given id
    #[error("Place not found: {0}")]
    NotFound(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PlacesError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::QuotaExceeded | Self::Timeout { .. }
        )
    }

    /// Map a non-OK service status to an error
    pub(crate) fn from_status(status: &str, message: Option<String>, subject: &str) -> Self {
        match status {
            "OVER_QUERY_LIMIT" => Self::QuotaExceeded,
            "REQUEST_DENIED" => Self::RequestDenied(message.unwrap_or_else(|| status.to_string())),
            "NOT_FOUND" | "ZERO_RESULTS" => Self::NotFound(subject.to_string()),
            other => Self::RequestFailed(message.unwrap_or_else(|| other.to_string())),
        }
    }
}
