//! SIMBAD error types

use thiserror::Error;

/// Errors that can occur during catalog queries
#[derive(Debug, Error)]
pub enum SimbadError {
    /// Connection to the catalog failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The script was rejected by the catalog
    #[error("Script error: {0}")]
    ScriptError(String),

    /// The output could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A requested field has no catalog equivalent
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl SimbadError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::ServiceUnavailable(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(SimbadError::ConnectionFailed("x".into()).is_retryable());
        assert!(SimbadError::ServiceUnavailable("x".into()).is_retryable());
        assert!(SimbadError::Timeout { timeout_secs: 30 }.is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!SimbadError::ScriptError("x".into()).is_retryable());
        assert!(!SimbadError::UnsupportedField("flux_Q".into()).is_retryable());
        assert!(!SimbadError::ParseError("x".into()).is_retryable());
    }

    #[test]
    fn display() {
        let err = SimbadError::UnsupportedField("flux_Q".into());
        assert!(err.to_string().contains("flux_Q"));
    }
}
