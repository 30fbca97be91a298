//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`TourRatingRepository`]: Persistence for tour ratings
//! - [`TourRepository`]: Persistence for tours
//! - [`TourPackageRepository`]: Persistence for tour packages
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations for tests and database-less runs
//! - `postgres`: PostgreSQL implementations

pub mod in_memory;
pub mod pagination;
pub mod postgres;
pub mod traits;

pub use pagination::{Page, PageRequest};
pub use traits::{
    RepositoryError, RepositoryResult, TourPackageRepository, TourRatingRepository,
    TourRepository,
};
