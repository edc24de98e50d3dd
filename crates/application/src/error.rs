//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The geocoder found no candidate, or strict matching rejected it
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The catalog returned nothing usable near the coordinate
    #[error("No catalogued object found near {0}")]
    NoObjectFound(String),

    /// Transport payload that is not a message (keep-alive, malformed)
    #[error("Not a message")]
    NotAMessage,

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::ExternalService(_)
        )
    }

    /// Check if this error is an ordinary outcome that ends processing
    /// of one message without a reply
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ApplicationError::LocationNotFound(_)
                | ApplicationError::NoObjectFound(_)
                | ApplicationError::NotAMessage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_errors() {
        assert!(ApplicationError::LocationNotFound("Atlantis".into()).is_expected());
        assert!(ApplicationError::NoObjectFound("RA 0".into()).is_expected());
        assert!(ApplicationError::NotAMessage.is_expected());
        assert!(!ApplicationError::ExternalService("timeout".into()).is_expected());
        assert!(!ApplicationError::RateLimited.is_expected());
    }

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::ExternalService("503".into()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(!ApplicationError::NotAMessage.is_retryable());
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::InvalidDateTime("x".into()).into();
        assert_eq!(err.to_string(), "Invalid date/time: x");
    }

    #[test]
    fn messages() {
        assert_eq!(
            ApplicationError::LocationNotFound("Atlantis".into()).to_string(),
            "Location not found: Atlantis"
        );
        assert_eq!(ApplicationError::NotAMessage.to_string(), "Not a message");
    }
}
