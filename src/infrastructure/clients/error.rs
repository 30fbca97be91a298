//! # Client Errors
//!
//! Error types for remote lookup clients.
//!
//! The central distinction is [`ClientError::is_unavailable`]: a service that
//! could not be reached (or said it cannot serve) is different from a service
//! that answered "not found".
//!
//! # Examples
//!
//! ```
//! use tour_ratings::infrastructure::clients::error::ClientError;
//!
//! let error = ClientError::timeout("GUESTSERVICES", "Request timed out");
//! assert!(error.is_unavailable());
//!
//! let error = ClientError::not_found("GUESTSERVICES", "guest 7");
//! assert!(!error.is_unavailable());
//! ```

use thiserror::Error;

/// Error type for remote lookup operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Request timed out.
    #[error("{service} timeout: {message}")]
    Timeout {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("{service} connection error: {message}")]
    Connection {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// The service answered that it cannot serve right now (502/503/504).
    #[error("{service} unavailable: {message}")]
    Unavailable {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("{service} resource not found: {message}")]
    NotFound {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// The request was rejected as invalid.
    #[error("{service} invalid request: {message}")]
    InvalidRequest {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// The service failed while handling the request.
    #[error("{service} server error: {message}")]
    Server {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// Response could not be understood.
    #[error("{service} protocol error: {message}")]
    Protocol {
        /// Name of the remote service.
        service: String,
        /// Error message.
        message: String,
    },

    /// Local failure, e.g. the HTTP client could not be built.
    #[error("client internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ClientError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a server error.
    #[must_use]
    pub fn server(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the service could not be reached or refused to serve.
    ///
    /// These are the failures a fallback may absorb.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Unavailable { .. }
        )
    }

    /// Returns true if the service reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
