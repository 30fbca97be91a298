//! # Lookup Client Traits
//!
//! Port definitions for remote guest and room lookups.
//!
//! The REST layer and any other caller depend on these traits, not on the
//! HTTP implementations, so tests can substitute in-process fakes.

use crate::domain::entities::{Guest, Room};
use crate::domain::value_objects::{GuestId, RoomId};
use crate::infrastructure::clients::error::ClientResult;
use async_trait::async_trait;
use std::fmt;

/// Read-only lookup of guests.
#[async_trait]
pub trait GuestLookup: Send + Sync + fmt::Debug {
    /// Finds all guests, optionally only those with the given email address.
    async fn find_all(&self, email_address: Option<&str>) -> ClientResult<Vec<Guest>>;

    /// Finds one guest by id.
    async fn find_one(&self, id: GuestId) -> ClientResult<Guest>;
}

/// Read-only lookup of rooms.
#[async_trait]
pub trait RoomLookup: Send + Sync + fmt::Debug {
    /// Finds all rooms, optionally only those with the given room number.
    async fn find_all(&self, room_number: Option<&str>) -> ClientResult<Vec<Room>>;

    /// Finds one room by id.
    async fn find_one(&self, id: RoomId) -> ClientResult<Room>;
}
