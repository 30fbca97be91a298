//! # In-Memory Repositories
//!
//! In-memory implementations for tests and for running without a database.
//!
//! ## Available Repositories
//!
//! - [`InMemoryTourRatingRepository`]: Tour rating persistence
//! - [`InMemoryTourRepository`]: Tour persistence
//! - [`InMemoryTourPackageRepository`]: Tour package persistence
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<BTreeMap>>` for thread-safe access.

pub mod tour_package_repository;
pub mod tour_rating_repository;
pub mod tour_repository;

pub use tour_package_repository::InMemoryTourPackageRepository;
pub use tour_rating_repository::InMemoryTourRatingRepository;
pub use tour_repository::InMemoryTourRepository;
