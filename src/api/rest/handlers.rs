//! # REST Handlers
//!
//! axum handlers translating HTTP requests into service calls.

use crate::api::rest::error::{ApiError, ApiResult};
use crate::application::dto::{AverageDto, RatingDto};
use crate::application::services::{CatalogService, TourRatingService};
use crate::domain::entities::{Guest, Room, Tour, TourPackage};
use crate::domain::value_objects::{CustomerId, GuestId, RoomId, TourId};
use crate::infrastructure::clients::{GuestLookup, RoomLookup};
use crate::infrastructure::persistence::{Page, PageRequest};
use axum::Json;
use axum::extract::{FromRequest, Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Rating use cases.
    pub rating_service: TourRatingService,
    /// Catalog queries.
    pub catalog_service: CatalogService,
    /// Guest service client.
    pub guests: Arc<dyn GuestLookup>,
    /// Room service client.
    pub rooms: Arc<dyn RoomLookup>,
}

/// JSON request body. Malformed or mistyped bodies answer 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Paging query parameters: `?page=0&size=20`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    /// Zero-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
}

impl From<PaginationParams> for PageRequest {
    fn from(params: PaginationParams) -> Self {
        PageRequest::new(
            params.page.unwrap_or(0),
            params.size.unwrap_or(PageRequest::DEFAULT_SIZE),
        )
    }
}

/// Paging information of a [`PaginatedResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Zero-based page number.
    pub number: u32,
    /// Page size.
    pub size: u32,
    /// Items across all pages.
    pub total_elements: u64,
    /// Number of pages.
    pub total_pages: u64,
}

/// A page of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Paging information.
    pub page: PaginationMeta,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        let meta = PaginationMeta {
            number: page.request().page(),
            size: page.request().size(),
            total_elements: page.total_elements(),
            total_pages: page.total_pages(),
        };
        Self {
            content: page.into_content(),
            page: meta,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process serves requests.
    pub status: String,
}

/// `?name=` filter for package search.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    /// Exact package name.
    pub name: String,
}

/// `?emailAddress=` filter for guest lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestFilter {
    /// Email address to match.
    pub email_address: Option<String>,
}

/// `?roomNumber=` filter for room lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilter {
    /// Room number to match.
    pub room_number: Option<String>,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `POST /tours/{tour_id}/ratings`
pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
    JsonBody(dto): JsonBody<RatingDto>,
) -> ApiResult<StatusCode> {
    state
        .rating_service
        .create(TourId::new(tour_id), dto)
        .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /tours/{tour_id}/ratings`
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PaginatedResponse<RatingDto>>> {
    let page = state
        .rating_service
        .list_by_tour(TourId::new(tour_id), params.into())
        .await?;
    Ok(Json(page.into()))
}

/// `GET /tours/{tour_id}/ratings/average`
pub async fn average_rating(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
) -> ApiResult<Json<AverageDto>> {
    let average = state.rating_service.average(TourId::new(tour_id)).await?;
    Ok(Json(AverageDto { average }))
}

/// `PUT /tours/{tour_id}/ratings`
pub async fn replace_rating(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
    JsonBody(dto): JsonBody<RatingDto>,
) -> ApiResult<Json<RatingDto>> {
    let updated = state
        .rating_service
        .replace(TourId::new(tour_id), dto)
        .await?;
    Ok(Json(updated))
}

/// `PATCH /tours/{tour_id}/ratings`
pub async fn update_rating(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
    JsonBody(dto): JsonBody<RatingDto>,
) -> ApiResult<Json<RatingDto>> {
    let updated = state
        .rating_service
        .update(TourId::new(tour_id), dto)
        .await?;
    Ok(Json(updated))
}

/// `DELETE /tours/{tour_id}/ratings/{customer_id}`
pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Path((tour_id, customer_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    state
        .rating_service
        .delete(TourId::new(tour_id), CustomerId::new(customer_id))
        .await?;
    Ok(StatusCode::OK)
}

/// `GET /tours`
pub async fn list_tours(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Tour>>> {
    Ok(Json(state.catalog_service.list_tours().await?))
}

/// `GET /tours/{tour_id}`
pub async fn get_tour(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<i32>,
) -> ApiResult<Json<Tour>> {
    Ok(Json(
        state.catalog_service.get_tour(TourId::new(tour_id)).await?,
    ))
}

/// `GET /packages`
pub async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TourPackage>>> {
    Ok(Json(state.catalog_service.list_packages().await?))
}

/// `GET /packages/{code}`
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<TourPackage>> {
    Ok(Json(state.catalog_service.get_package(&code).await?))
}

/// `GET /packages/search/findByName?name=`
pub async fn find_package_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<TourPackage>> {
    Ok(Json(
        state
            .catalog_service
            .find_package_by_name(&query.name)
            .await?,
    ))
}

/// `GET /guests?emailAddress=`
pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GuestFilter>,
) -> ApiResult<Json<Vec<Guest>>> {
    let guests = state
        .guests
        .find_all(filter.email_address.as_deref())
        .await?;
    Ok(Json(guests))
}

/// `GET /guests/{id}`
pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Guest>> {
    Ok(Json(state.guests.find_one(GuestId::new(id)).await?))
}

/// `GET /rooms?roomNumber=`
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<RoomFilter>,
) -> ApiResult<Json<Vec<Room>>> {
    let rooms = state
        .rooms
        .find_all(filter.room_number.as_deref())
        .await?;
    Ok(Json(rooms))
}

/// `GET /rooms/{id}`
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Room>> {
    Ok(Json(state.rooms.find_one(RoomId::new(id)).await?))
}
