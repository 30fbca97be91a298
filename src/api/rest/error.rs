//! # API Errors
//!
//! Maps application errors onto HTTP responses with a plain-text body.
//!
//! | Error | Status |
//! |---|---|
//! | not found (tour, package, rating, remote resource) | 404 |
//! | validation / domain | 400 |
//! | conflict | 409 |
//! | remote service failure | 502 |
//! | anything else | 500 |

use crate::application::error::ApplicationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error returned by REST handlers.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl ApiError {
    /// Returns the status code and plain-text body for this error.
    #[must_use]
    pub fn to_response(&self) -> (StatusCode, String) {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else if self.0.is_conflict() {
            StatusCode::CONFLICT
        } else if matches!(self.0, ApplicationError::Client(_)) {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.0.to_string())
    }

    /// Returns the wrapped application error.
    #[must_use]
    pub fn inner(&self) -> &ApplicationError {
        &self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ApplicationError>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self.0, "request rejected");
        }
        (status, body).into_response()
    }
}

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;
