//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside their valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Sexagesimal text that could not be parsed
    #[error("Invalid sexagesimal coordinate: {0}")]
    InvalidSexagesimal(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates("latitude 91".to_string());
        assert_eq!(err.to_string(), "Invalid coordinates: latitude 91");
    }

    #[test]
    fn invalid_sexagesimal_error_message() {
        let err = DomainError::InvalidSexagesimal("12 xx".to_string());
        assert_eq!(err.to_string(), "Invalid sexagesimal coordinate: 12 xx");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }
}
