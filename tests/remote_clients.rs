//! Guest and room clients against mock services.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use std::time::Duration;
use tour_ratings::domain::value_objects::{GuestId, RoomId};
use tour_ratings::infrastructure::clients::{
    FallbackPolicy, GuestClient, GuestLookup, HttpClient, RoomClient, RoomLookup,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE: &str = "http://127.0.0.1:1";
const TIMEOUT_MS: u64 = 500;

fn guest_client(base_url: &str) -> GuestClient {
    GuestClient::new(HttpClient::new(GuestClient::SERVICE_NAME, base_url, TIMEOUT_MS).unwrap())
}

fn room_client(base_url: &str) -> RoomClient {
    RoomClient::new(HttpClient::new(RoomClient::SERVICE_NAME, base_url, TIMEOUT_MS).unwrap())
}

mod guests {
    use super::*;

    #[tokio::test]
    async fn find_all_by_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests"))
            .and(query_param("emailAddress", "ada@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 3,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "emailAddress": "ada@example.com",
                "country": "UK"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let guests = guest_client(&server.uri())
            .find_all(Some("ada@example.com"))
            .await
            .unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].id, GuestId::new(3));
        assert_eq!(guests[0].last_name, "Lovelace");
        assert!(guests[0].phone_number.is_empty());
    }

    #[tokio::test]
    async fn find_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests/3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 3, "firstName": "Ada"})),
            )
            .mount(&server)
            .await;

        let guest = guest_client(&server.uri())
            .find_one(GuestId::new(3))
            .await
            .unwrap();
        assert_eq!(guest.first_name, "Ada");
        assert!(!guest.is_placeholder());
    }

    #[tokio::test]
    async fn not_found_is_not_replaced_by_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = guest_client(&server.uri())
            .find_one(GuestId::new(9))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unreachable_service_falls_back() {
        let client = guest_client(UNREACHABLE);
        assert!(client.find_all(None).await.unwrap().is_empty());

        let guest = client.find_one(GuestId::new(12)).await.unwrap();
        assert_eq!(guest.id, GuestId::new(12));
        assert!(guest.is_placeholder());
    }

    #[tokio::test]
    async fn service_unavailable_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let guests = guest_client(&server.uri()).find_all(None).await.unwrap();
        assert!(guests.is_empty());
    }

    #[tokio::test]
    async fn slow_service_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1}))
                    .set_delay(Duration::from_millis(TIMEOUT_MS * 4)),
            )
            .mount(&server)
            .await;

        let guest = guest_client(&server.uri())
            .find_one(GuestId::new(1))
            .await
            .unwrap();
        assert!(guest.is_placeholder());
    }

    #[tokio::test]
    async fn redirect_loop_is_not_replaced_by_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/guests"))
            .mount(&server)
            .await;

        let err = guest_client(&server.uri()).find_all(None).await.unwrap_err();
        assert!(!err.is_unavailable());
    }

    #[tokio::test]
    async fn malformed_body_is_not_replaced_by_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guests/5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = guest_client(&server.uri())
            .find_one(GuestId::new(5))
            .await
            .unwrap_err();
        assert!(!err.is_unavailable());
    }

    #[tokio::test]
    async fn propagate_policy_surfaces_the_error() {
        let client = guest_client(UNREACHABLE).with_fallback(FallbackPolicy::Propagate);
        let err = client.find_all(None).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}

mod rooms {
    use super::*;

    #[tokio::test]
    async fn find_all_by_room_number() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .and(query_param("roomNumber", "P1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "name": "Piccadilly",
                "roomNumber": "P1",
                "bedInfo": "1Q"
            }])))
            .mount(&server)
            .await;

        let rooms = room_client(&server.uri())
            .find_all(Some("P1"))
            .await
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].bed_info, "1Q");
    }

    #[tokio::test]
    async fn find_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rooms/4"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 4, "roomNumber": "C2"})),
            )
            .mount(&server)
            .await;

        let room = room_client(&server.uri())
            .find_one(RoomId::new(4))
            .await
            .unwrap();
        assert_eq!(room.id, RoomId::new(4));
        assert_eq!(room.room_number, "C2");
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let err = room_client(UNREACHABLE).find_all(None).await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn server_error_is_not_masked() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rooms/4"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = room_client(&server.uri())
            .find_one(RoomId::new(4))
            .await
            .unwrap_err();
        assert!(!err.is_unavailable());
        assert!(!err.is_not_found());
    }
}
