//! # Domain Errors
//!
//! Error types raised when a domain invariant is violated.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::errors::DomainError;
//!
//! let err = DomainError::InvalidScore(7);
//! assert!(err.to_string().contains("7"));
//! ```

use thiserror::Error;

/// Error type for domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Score outside the accepted range.
    #[error("invalid score {0}: must be between 0 and 5")]
    InvalidScore(i32),

    /// Comment longer than the accepted maximum.
    #[error("comment too long: {length} characters (max {max})")]
    CommentTooLong {
        /// Length of the rejected comment in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A required field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Generic validation failure.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_score_message() {
        let err = DomainError::InvalidScore(-1);
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("between 0 and 5"));
    }

    #[test]
    fn comment_too_long_message() {
        let err = DomainError::CommentTooLong {
            length: 300,
            max: 255,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("255"));
    }

    #[test]
    fn missing_field_message() {
        let err = DomainError::MissingField("score");
        assert_eq!(err.to_string(), "missing required field: score");
    }
}
