//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for the remote lookup clients.
//!
//! This module provides a reusable HTTP client bound to one named service
//! with:
//! - A configurable timeout
//! - JSON deserialization
//! - Mapping of transport failures and HTTP statuses to [`ClientError`]
//!
//! # Examples
//!
//! ```ignore
//! use tour_ratings::infrastructure::clients::http_client::HttpClient;
//!
//! let client = HttpClient::new("GUESTSERVICES", "http://localhost:8800", 5000)?;
//! let guests: Vec<Guest> = client.get("/guests").await?;
//! ```

use crate::infrastructure::clients::error::{ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper bound to one named remote service.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Logical service name, used in errors and logs.
    service: String,
    /// Base URL without trailing slash.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client for `service` at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Internal` if the client cannot be created.
    pub fn new(
        service: impl Into<String>,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ClientError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service: service.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Returns the logical service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request to `path` and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a transport error (`Timeout`, `Connection`) if the request
    /// fails, a status-derived error for non-2xx responses, and
    /// `ClientError::Protocol` if the body cannot be parsed.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ClientError::protocol(&self.service, format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ClientError.
    ///
    /// Only timeouts and connect failures count as unavailability.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::timeout(&self.service, "Request timed out")
        } else if error.is_connect() {
            ClientError::connection(&self.service, format!("Connection failed: {}", error))
        } else if error.is_redirect() || error.is_decode() || error.is_body() {
            ClientError::protocol(&self.service, format!("Invalid response: {}", error))
        } else {
            ClientError::internal(format!("{} request failed: {}", self.service, error))
        }
    }

    /// Maps an HTTP status code to a ClientError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> ClientError {
        match status {
            StatusCode::BAD_REQUEST => {
                ClientError::invalid_request(&self.service, format!("Bad request: {}", body))
            }
            StatusCode::NOT_FOUND => {
                ClientError::not_found(&self.service, format!("Resource not found: {}", body))
            }
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => ClientError::unavailable(
                &self.service,
                format!("Service unavailable ({}): {}", status, body),
            ),
            s if s.is_server_error() => {
                ClientError::server(&self.service, format!("Server error ({}): {}", status, body))
            }
            _ => ClientError::protocol(&self.service, format!("HTTP error ({}): {}", status, body)),
        }
    }
}
