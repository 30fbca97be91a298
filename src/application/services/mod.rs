//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`TourRatingService`]: rating create/read/update/delete
//! - [`CatalogService`]: read-only tour and package queries, startup seeding

pub mod catalog_service;
pub mod tour_rating_service;

pub use catalog_service::{CatalogSeed, CatalogService};
pub use tour_rating_service::{TourRatingService, average_score};
