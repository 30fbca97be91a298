//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)         - Invariant violations in submitted data
//! ├── Repository(RepositoryError) - Persistence failures
//! ├── Client(ClientError)         - Remote lookup failures
//! ├── Validation(String)          - Input validation failures
//! ├── NotFound                    - Tour, package or rating absent
//! ├── Conflict(String)            - Rating already exists
//! └── Internal(String)            - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use tour_ratings::application::error::ApplicationError;
//! use tour_ratings::infrastructure::persistence::RepositoryError;
//!
//! let err = ApplicationError::not_found("Tour", "42");
//! assert!(err.is_not_found());
//!
//! let err: ApplicationError = RepositoryError::duplicate("TourRating", "tour 1 / customer 2").into();
//! assert!(err.is_conflict());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::clients::error::ClientError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from submitted data.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Persistence failure.
    #[error("repository error: {0}")]
    Repository(RepositoryError),

    /// Remote lookup failure.
    #[error("remote service error: {0}")]
    Client(#[from] ClientError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// Resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Repository(e) => e.is_not_found(),
            Self::Client(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }

    /// Returns true if this is a conflict error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { entity_type, id } => Self::not_found(entity_type, id),
            RepositoryError::Duplicate { entity_type, id } => {
                Self::conflict(format!("{} already exists: {}", entity_type, id))
            }
            other => Self::Repository(other),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
