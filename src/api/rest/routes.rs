//! # REST Routes
//!
//! The route table. Path parameters are extracted by the handlers:
//! `{tour_id}` and `{customer_id}` as `i32`, guest/room `{id}` as `i64`,
//! package `{code}` as a string.

use crate::api::rest::handlers::{
    AppState, average_rating, create_rating, delete_rating, find_package_by_name, get_guest,
    get_package, get_room, get_tour, health, list_guests, list_packages, list_ratings,
    list_rooms, list_tours, replace_rating, update_rating,
};
use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tours", get(list_tours))
        .route("/tours/{tour_id}", get(get_tour))
        .route(
            "/tours/{tour_id}/ratings",
            post(create_rating)
                .get(list_ratings)
                .put(replace_rating)
                .patch(update_rating),
        )
        .route("/tours/{tour_id}/ratings/average", get(average_rating))
        .route(
            "/tours/{tour_id}/ratings/{customer_id}",
            delete(delete_rating),
        )
        .route("/packages", get(list_packages))
        .route("/packages/{code}", get(get_package))
        .route("/packages/search/findByName", get(find_package_by_name))
        .route("/guests", get(list_guests))
        .route("/guests/{id}", get(get_guest))
        .route("/rooms", get(list_rooms))
        .route("/rooms/{id}", get(get_room))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
