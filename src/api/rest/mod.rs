//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Ratings
//! - `POST /tours/{tourId}/ratings` - Create a rating (201)
//! - `GET /tours/{tourId}/ratings?page=&size=` - Page of ratings
//! - `GET /tours/{tourId}/ratings/average` - `{"average": number|null}`
//! - `PUT /tours/{tourId}/ratings` - Replace score and comment
//! - `PATCH /tours/{tourId}/ratings` - Update present fields
//! - `DELETE /tours/{tourId}/ratings/{customerId}` - Delete a rating
//!
//! ## Catalog
//! - `GET /tours`, `GET /tours/{tourId}`
//! - `GET /packages`, `GET /packages/{code}`, `GET /packages/search/findByName?name=`
//!
//! ## Remote lookups
//! - `GET /guests?emailAddress=`, `GET /guests/{id}`
//! - `GET /rooms?roomNumber=`, `GET /rooms/{id}`
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! Errors are plain text: 404 for missing resources, 400 for invalid input,
//! 409 for duplicate ratings, 502 for remote service failures.
//!
//! # Usage
//!
//! ```ignore
//! use tour_ratings::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     rating_service: /* ... */,
//!     catalog_service: /* ... */,
//!     guests: /* ... */,
//!     rooms: /* ... */,
//! });
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use handlers::{
    AppState, GuestFilter, HealthResponse, JsonBody, NameQuery, PaginatedResponse,
    PaginationMeta, PaginationParams, RoomFilter,
};
pub use routes::create_router;
