//! REST surface tests driven through the router with in-memory stores.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use tour_ratings::api::rest::{AppState, create_router};
use tour_ratings::application::services::{CatalogSeed, CatalogService, TourRatingService};
use tour_ratings::domain::entities::{Guest, Room, Tour, TourPackage};
use tour_ratings::domain::value_objects::{GuestId, RoomId, TourId};
use tour_ratings::infrastructure::clients::{ClientError, ClientResult, GuestLookup, RoomLookup};
use tour_ratings::infrastructure::persistence::in_memory::{
    InMemoryTourPackageRepository, InMemoryTourRatingRepository, InMemoryTourRepository,
};
use tower::ServiceExt;

#[derive(Debug)]
struct StubGuests;

#[async_trait]
impl GuestLookup for StubGuests {
    async fn find_all(&self, email_address: Option<&str>) -> ClientResult<Vec<Guest>> {
        let mut guest = Guest::placeholder(GuestId::new(1));
        guest.email_address = "ada@example.com".to_string();
        Ok(match email_address {
            Some(email) if email != guest.email_address => Vec::new(),
            _ => vec![guest],
        })
    }

    async fn find_one(&self, id: GuestId) -> ClientResult<Guest> {
        if id == GuestId::new(1) {
            Ok(Guest::placeholder(id))
        } else {
            Err(ClientError::not_found("GUESTSERVICES", format!("guest {}", id)))
        }
    }
}

#[derive(Debug)]
struct DownRooms;

#[async_trait]
impl RoomLookup for DownRooms {
    async fn find_all(&self, _room_number: Option<&str>) -> ClientResult<Vec<Room>> {
        Err(ClientError::connection("ROOMSERVICES", "connection refused"))
    }

    async fn find_one(&self, id: RoomId) -> ClientResult<Room> {
        Err(ClientError::not_found("ROOMSERVICES", format!("room {}", id)))
    }
}

async fn app() -> Router {
    let tours = Arc::new(InMemoryTourRepository::new());
    let packages = Arc::new(InMemoryTourPackageRepository::new());
    let ratings = Arc::new(InMemoryTourRatingRepository::new());

    let catalog_service = CatalogService::new(tours.clone(), packages);
    catalog_service
        .seed(&CatalogSeed {
            packages: vec![TourPackage::new("BC", "Backpack Cal")],
            tours: vec![
                Tour::new(TourId::new(1), "Big Sur Retreat", "BC"),
                Tour::new(TourId::new(2), "In the Steps of John Muir", "BC"),
            ],
        })
        .await
        .unwrap();

    create_router(Arc::new(AppState {
        rating_service: TourRatingService::new(tours, ratings),
        catalog_service,
        guests: Arc::new(StubGuests),
        rooms: Arc::new(DownRooms),
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn rate(app: &Router, tour: i32, customer: i32, score: i32, comment: &str) -> StatusCode {
    let body = json!({"score": score, "comment": comment, "customerId": customer});
    send(app, "POST", &format!("/tours/{}/ratings", tour), Some(body))
        .await
        .0
}

#[tokio::test]
async fn health_is_ok() {
    let app = app().await;
    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

mod ratings {
    use super::*;

    #[tokio::test]
    async fn create_then_list() {
        let app = app().await;
        assert_eq!(rate(&app, 1, 100, 5, "great").await, StatusCode::CREATED);

        let (status, body) = send_json(&app, "GET", "/tours/1/ratings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "content": [{"score": 5, "comment": "great", "customerId": 100}],
                "page": {"number": 0, "size": 20, "totalElements": 1, "totalPages": 1}
            })
        );
    }

    #[tokio::test]
    async fn create_on_unknown_tour_is_404() {
        let app = app().await;
        let body = json!({"score": 4, "customerId": 1});
        let (status, text) = send(&app, "POST", "/tours/99/ratings", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(String::from_utf8(text).unwrap(), "Tour not found: 99");
    }

    #[tokio::test]
    async fn duplicate_create_is_409_and_keeps_original() {
        let app = app().await;
        assert_eq!(rate(&app, 1, 7, 2, "meh").await, StatusCode::CREATED);
        assert_eq!(rate(&app, 1, 7, 5, "changed my mind").await, StatusCode::CONFLICT);

        let (_, body) = send_json(&app, "GET", "/tours/1/ratings", None).await;
        assert_eq!(body["content"][0]["score"], 2);
        assert_eq!(body["content"][0]["comment"], "meh");
    }

    #[tokio::test]
    async fn out_of_range_score_is_400() {
        let app = app().await;
        assert_eq!(rate(&app, 1, 7, 6, "").await, StatusCode::BAD_REQUEST);
        assert_eq!(rate(&app, 1, 7, -1, "").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_score_on_create_is_400() {
        let app = app().await;
        let body = json!({"comment": "no score", "customerId": 3});
        let (status, _) = send(&app, "POST", "/tours/1/ratings", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_bodies_are_400() {
        let app = app().await;
        let no_customer = json!({"score": 4, "comment": "who am I"});
        let (status, _) = send(&app, "POST", "/tours/1/ratings", Some(no_customer)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let text_score = json!({"score": "four", "customerId": 1});
        let (status, text) = send(&app, "POST", "/tours/1/ratings", Some(text_score)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!text.is_empty());

        rate(&app, 1, 2, 3, "").await;
        let bad = json!({"score": 3.5, "customerId": 2});
        let (put, _) = send(&app, "PUT", "/tours/1/ratings", Some(bad.clone())).await;
        let (patch, _) = send(&app, "PATCH", "/tours/1/ratings", Some(bad)).await;
        assert_eq!(put, StatusCode::BAD_REQUEST);
        assert_eq!(patch, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn paging() {
        let app = app().await;
        for customer in 1..=3 {
            rate(&app, 1, customer, 4, "").await;
        }
        let (status, body) = send_json(&app, "GET", "/tours/1/ratings?page=1&size=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"].as_array().unwrap().len(), 1);
        assert_eq!(body["content"][0]["customerId"], 3);
        assert_eq!(body["page"]["totalElements"], 3);
        assert_eq!(body["page"]["totalPages"], 2);
    }

    #[tokio::test]
    async fn ratings_are_scoped_to_their_tour() {
        let app = app().await;
        rate(&app, 1, 1, 5, "").await;
        let (_, body) = send_json(&app, "GET", "/tours/2/ratings", None).await;
        assert_eq!(body["content"], json!([]));
        assert_eq!(body["page"]["totalElements"], 0);
    }

    #[tokio::test]
    async fn average() {
        let app = app().await;
        let (status, body) = send_json(&app, "GET", "/tours/1/ratings/average", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"average": null}));

        for (customer, score) in [(1, 3), (2, 4), (3, 5)] {
            rate(&app, 1, customer, score, "").await;
        }
        let (_, body) = send_json(&app, "GET", "/tours/1/ratings/average", None).await;
        assert_eq!(body["average"].as_f64(), Some(4.0));
    }

    #[tokio::test]
    async fn put_replaces_score_and_comment() {
        let app = app().await;
        rate(&app, 1, 9, 1, "bad").await;

        let body = json!({"score": 4, "comment": "better", "customerId": 9});
        let (status, updated) = send_json(&app, "PUT", "/tours/1/ratings", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, json!({"score": 4, "comment": "better", "customerId": 9}));
    }

    #[tokio::test]
    async fn patch_updates_only_present_fields() {
        let app = app().await;
        rate(&app, 1, 9, 1, "keep me").await;

        let body = json!({"score": 3, "customerId": 9});
        let (status, updated) = send_json(&app, "PATCH", "/tours/1/ratings", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["score"], 3);
        assert_eq!(updated["comment"], "keep me");

        let body = json!({"comment": "new words", "customerId": 9});
        let (_, updated) = send_json(&app, "PATCH", "/tours/1/ratings", Some(body)).await;
        assert_eq!(updated["score"], 3);
        assert_eq!(updated["comment"], "new words");
    }

    #[tokio::test]
    async fn update_of_missing_rating_is_404() {
        let app = app().await;
        let body = json!({"score": 3, "customerId": 42});
        let (put, _) = send(&app, "PUT", "/tours/1/ratings", Some(body.clone())).await;
        let (patch, _) = send(&app, "PATCH", "/tours/1/ratings", Some(body)).await;
        assert_eq!(put, StatusCode::NOT_FOUND);
        assert_eq!(patch, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_gone() {
        let app = app().await;
        rate(&app, 1, 5, 5, "").await;

        let (status, _) = send(&app, "DELETE", "/tours/1/ratings/5", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "DELETE", "/tours/1/ratings/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = json!({"score": 2, "customerId": 5});
        let (status, _) = send(&app, "PATCH", "/tours/1/ratings", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn tours() {
        let app = app().await;
        let (status, body) = send_json(&app, "GET", "/tours", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send_json(&app, "GET", "/tours/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Big Sur Retreat");
        assert_eq!(body["tourPackageCode"], "BC");

        let (status, _) = send(&app, "GET", "/tours/50", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn packages() {
        let app = app().await;
        let (status, body) = send_json(&app, "GET", "/packages/BC", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"code": "BC", "name": "Backpack Cal"}));

        let (status, body) = send_json(
            &app,
            "GET",
            "/packages/search/findByName?name=Backpack%20Cal",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "BC");

        let (status, _) = send(&app, "GET", "/packages/search/findByName?name=Nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod lookups {
    use super::*;

    #[tokio::test]
    async fn guests_by_email() {
        let app = app().await;
        let (status, body) =
            send_json(&app, "GET", "/guests?emailAddress=ada@example.com", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["emailAddress"], "ada@example.com");

        let (_, body) = send_json(&app, "GET", "/guests?emailAddress=bob@example.com", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unknown_guest_is_404() {
        let app = app().await;
        let (status, _) = send(&app, "GET", "/guests/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_room_service_is_502() {
        let app = app().await;
        let (status, text) = send(&app, "GET", "/rooms?roomNumber=P1", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(String::from_utf8(text).unwrap().contains("ROOMSERVICES"));
    }

    #[tokio::test]
    async fn unknown_room_is_404() {
        let app = app().await;
        let (status, _) = send(&app, "GET", "/rooms/8", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
