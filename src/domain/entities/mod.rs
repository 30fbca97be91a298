//! # Domain Entities
//!
//! ## Owned by this service
//!
//! - [`Tour`]: catalog tour that ratings attach to
//! - [`TourPackage`]: named group of tours
//! - [`TourRating`]: a customer's score and comment for a tour
//!
//! ## Remote projections
//!
//! - [`Guest`]: guest record from the guest service
//! - [`Room`]: room record from the room service

pub mod guest;
pub mod room;
pub mod tour;
pub mod tour_package;
pub mod tour_rating;

pub use guest::Guest;
pub use room::Room;
pub use tour::Tour;
pub use tour_package::TourPackage;
pub use tour_rating::TourRating;
