//! # Room Client
//!
//! HTTP implementation of [`RoomLookup`] against the room service's
//! `/rooms` resource. Every failure, including unavailability, propagates.

use crate::domain::entities::Room;
use crate::domain::value_objects::RoomId;
use crate::infrastructure::clients::error::ClientResult;
use crate::infrastructure::clients::http_client::HttpClient;
use crate::infrastructure::clients::traits::RoomLookup;
use async_trait::async_trait;

/// Client for the remote room service.
#[derive(Debug, Clone)]
pub struct RoomClient {
    http: HttpClient,
}

impl RoomClient {
    /// Logical name of the room service.
    pub const SERVICE_NAME: &'static str = "ROOMSERVICES";

    /// Creates a room client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoomLookup for RoomClient {
    async fn find_all(&self, room_number: Option<&str>) -> ClientResult<Vec<Room>> {
        match room_number {
            Some(number) => {
                self.http
                    .get_with_params("/rooms", &[("roomNumber", number)])
                    .await
            }
            None => self.http.get("/rooms").await,
        }
    }

    async fn find_one(&self, id: RoomId) -> ClientResult<Room> {
        self.http.get(&format!("/rooms/{}", id)).await
    }
}
