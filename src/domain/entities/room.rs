//! # Room
//!
//! Read-only projection of a room held by the remote room service.

use crate::domain::value_objects::RoomId;
use serde::{Deserialize, Serialize};

/// A room as returned by the room service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Room number, e.g. `"P1"`.
    #[serde(default)]
    pub room_number: String,
    /// Bed configuration, e.g. `"1Q"`.
    #[serde(default)]
    pub bed_info: String,
}
