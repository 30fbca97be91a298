//! # Guest
//!
//! Read-only projection of a guest held by the remote guest service.

use crate::domain::value_objects::GuestId;
use serde::{Deserialize, Serialize};

/// A guest as returned by the guest service.
///
/// Fields other than `id` default to empty when absent from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Guest identifier.
    pub id: GuestId,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email_address: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    /// Phone number.
    #[serde(default)]
    pub phone_number: String,
}

impl Guest {
    /// Creates a guest carrying only an id.
    ///
    /// Used as the substitute value when the guest service is unavailable.
    #[must_use]
    pub fn placeholder(id: GuestId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            email_address: String::new(),
            address: String::new(),
            country: String::new(),
            state: String::new(),
            phone_number: String::new(),
        }
    }

    /// Returns true if this guest carries no data beyond its id.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder(self.id)
    }
}
