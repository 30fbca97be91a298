//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`TourId`], [`CustomerId`]: integer identifiers owned by this service
//! - [`GuestId`], [`RoomId`]: identifiers owned by remote services
//! - [`TourRatingPk`]: composite (tour, customer) rating key
//!
//! ## Validated Values
//!
//! - [`Score`]: rating score in `0..=5`
//!
//! ## Domain Enums
//!
//! - `Difficulty`: how demanding a tour is
//! - `Region`: where a tour takes place

pub mod enums;
pub mod ids;
pub mod score;

pub use enums::{Difficulty, ParseEnumError, Region};
pub use ids::{CustomerId, GuestId, RoomId, TourId, TourRatingPk};
pub use score::Score;
