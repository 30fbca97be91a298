//! # Guest Client
//!
//! HTTP implementation of [`GuestLookup`] against the guest service's
//! `/guests` resource.
//!
//! By default the client substitutes an empty list or a placeholder guest
//! when the service is unavailable. A "not found" answer is never
//! substituted.
//!
//! # Examples
//!
//! ```ignore
//! use tour_ratings::infrastructure::clients::{GuestClient, GuestLookup, HttpClient};
//!
//! let http = HttpClient::new(GuestClient::SERVICE_NAME, "http://localhost:8800", 2000)?;
//! let client = GuestClient::new(http);
//! let guests = client.find_all(Some("ada@example.com")).await?;
//! ```

use crate::domain::entities::Guest;
use crate::domain::value_objects::GuestId;
use crate::infrastructure::clients::error::ClientResult;
use crate::infrastructure::clients::fallback::FallbackPolicy;
use crate::infrastructure::clients::http_client::HttpClient;
use crate::infrastructure::clients::traits::GuestLookup;
use async_trait::async_trait;

/// Client for the remote guest service.
#[derive(Debug, Clone)]
pub struct GuestClient {
    http: HttpClient,
    fallback: FallbackPolicy,
}

impl GuestClient {
    /// Logical name of the guest service.
    pub const SERVICE_NAME: &'static str = "GUESTSERVICES";

    /// Creates a guest client that falls back when the service is unavailable.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            fallback: FallbackPolicy::UseFallback,
        }
    }

    /// Overrides the fallback policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the active fallback policy.
    #[must_use]
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }
}

#[async_trait]
impl GuestLookup for GuestClient {
    async fn find_all(&self, email_address: Option<&str>) -> ClientResult<Vec<Guest>> {
        let result: ClientResult<Vec<Guest>> = match email_address {
            Some(email) => {
                self.http
                    .get_with_params("/guests", &[("emailAddress", email)])
                    .await
            }
            None => self.http.get("/guests").await,
        };
        self.fallback.apply(result, Vec::new)
    }

    async fn find_one(&self, id: GuestId) -> ClientResult<Guest> {
        let result: ClientResult<Guest> = self.http.get(&format!("/guests/{}", id)).await;
        self.fallback.apply(result, || Guest::placeholder(id))
    }
}
