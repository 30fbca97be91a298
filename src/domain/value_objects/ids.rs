//! # Identifiers
//!
//! Integer identifier newtypes and the composite rating key.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::value_objects::{CustomerId, TourId, TourRatingPk};
//!
//! let pk = TourRatingPk::new(TourId::new(1), CustomerId::new(42));
//! assert_eq!(pk.tour_id(), TourId::new(1));
//! assert_eq!(pk.to_string(), "tour 1 / customer 42");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Creates a new identifier from its raw value.
            #[inline]
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[inline]
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

int_id!(
    /// Identifier of a tour.
    TourId,
    i32
);

int_id!(
    /// Identifier of the customer who submitted a rating.
    CustomerId,
    i32
);

int_id!(
    /// Identifier of a guest held by the remote guest service.
    GuestId,
    i64
);

int_id!(
    /// Identifier of a room held by the remote room service.
    RoomId,
    i64
);

/// Composite key of a tour rating.
///
/// At most one rating exists per (tour, customer) pair. Ordering is by
/// tour first, then customer, which gives ratings of a single tour a stable
/// ascending-customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TourRatingPk {
    tour_id: TourId,
    customer_id: CustomerId,
}

impl TourRatingPk {
    /// Creates a composite key.
    #[must_use]
    pub const fn new(tour_id: TourId, customer_id: CustomerId) -> Self {
        Self {
            tour_id,
            customer_id,
        }
    }

    /// Returns the tour part of the key.
    #[inline]
    #[must_use]
    pub const fn tour_id(&self) -> TourId {
        self.tour_id
    }

    /// Returns the customer part of the key.
    #[inline]
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl fmt::Display for TourRatingPk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tour {} / customer {}", self.tour_id, self.customer_id)
    }
}
