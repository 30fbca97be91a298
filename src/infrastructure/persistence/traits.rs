//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the repository traits (ports) that abstract
//! persistence operations. Implementations can use different backends
//! like PostgreSQL or in-memory storage.
//!
//! # Available Repositories
//!
//! - [`TourRatingRepository`]: Persistence for tour ratings keyed by (tour, customer)
//! - [`TourRepository`]: Persistence for catalog tours
//! - [`TourPackageRepository`]: Persistence for tour packages
//!
//! # Examples
//!
//! ```ignore
//! use tour_ratings::infrastructure::persistence::traits::TourRatingRepository;
//!
//! async fn print_ratings(repo: &impl TourRatingRepository, tour_id: TourId) {
//!     let ratings = repo.find_by_tour(tour_id).await.unwrap();
//!     println!("Tour {} has {} ratings", tour_id, ratings.len());
//! }
//! ```

use crate::domain::entities::{Tour, TourPackage, TourRating};
use crate::domain::value_objects::{TourId, TourRatingPk};
use crate::infrastructure::persistence::pagination::{Page, PageRequest};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for tour ratings.
///
/// Ratings are keyed by [`TourRatingPk`]; at most one rating exists per
/// (tour, customer) pair.
///
/// # Examples
///
/// ```ignore
/// use tour_ratings::infrastructure::persistence::traits::TourRatingRepository;
///
/// async fn example(repo: &impl TourRatingRepository) {
///     // Second page of ten, ascending by customer id
///     let page = repo.find_page_by_tour(tour_id, PageRequest::new(1, 10)).await?;
///
///     // A single rating
///     let rating = repo.get(&TourRatingPk::new(tour_id, customer_id)).await?;
/// }
/// ```
#[async_trait]
pub trait TourRatingRepository: Send + Sync + fmt::Debug {
    /// Inserts a new rating.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a rating with the same key
    /// already exists; the stored rating is left unchanged.
    async fn insert(&self, rating: &TourRating) -> RepositoryResult<()>;

    /// Saves a rating.
    ///
    /// If a rating with the same key already exists, it is overwritten.
    async fn save(&self, rating: &TourRating) -> RepositoryResult<()>;

    /// Gets a rating by key.
    ///
    /// Returns `None` if the rating does not exist.
    async fn get(&self, pk: &TourRatingPk) -> RepositoryResult<Option<TourRating>>;

    /// Finds every rating of a tour, ascending by customer id.
    async fn find_by_tour(&self, tour_id: TourId) -> RepositoryResult<Vec<TourRating>>;

    /// Finds one page of a tour's ratings, ascending by customer id.
    ///
    /// The returned page carries the total number of ratings for the tour.
    async fn find_page_by_tour(
        &self,
        tour_id: TourId,
        request: PageRequest,
    ) -> RepositoryResult<Page<TourRating>>;

    /// Deletes a rating by key.
    ///
    /// Returns `Ok(true)` if the rating was deleted, `Ok(false)` if it didn't exist.
    async fn delete(&self, pk: &TourRatingPk) -> RepositoryResult<bool>;

    /// Counts all ratings.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for catalog tours.
#[async_trait]
pub trait TourRepository: Send + Sync + fmt::Debug {
    /// Saves a tour.
    ///
    /// If the tour already exists, it will be updated.
    async fn save(&self, tour: &Tour) -> RepositoryResult<()>;

    /// Gets a tour by ID.
    ///
    /// Returns `None` if the tour does not exist.
    async fn get(&self, id: TourId) -> RepositoryResult<Option<Tour>>;

    /// Gets all tours, ascending by id.
    async fn get_all(&self) -> RepositoryResult<Vec<Tour>>;

    /// Counts all tours.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for tour packages.
#[async_trait]
pub trait TourPackageRepository: Send + Sync + fmt::Debug {
    /// Saves a tour package.
    ///
    /// If the package already exists, it will be updated.
    async fn save(&self, package: &TourPackage) -> RepositoryResult<()>;

    /// Gets a package by code.
    ///
    /// Returns `None` if the package does not exist.
    async fn get(&self, code: &str) -> RepositoryResult<Option<TourPackage>>;

    /// Finds a package by its exact name.
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<TourPackage>>;

    /// Gets all packages, ascending by code.
    async fn get_all(&self) -> RepositoryResult<Vec<TourPackage>>;

    /// Counts all packages.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod repository_error {
        use super::*;

        #[test]
        fn not_found_error() {
            let err = RepositoryError::not_found("TourRating", "tour 1 / customer 2");
            assert!(err.is_not_found());
            assert!(!err.is_duplicate());
            assert!(err.to_string().contains("not found"));
            assert!(err.to_string().contains("TourRating"));
            assert!(err.to_string().contains("customer 2"));
        }

        #[test]
        fn duplicate_error() {
            let err = RepositoryError::duplicate("TourRating", "tour 1 / customer 2");
            assert!(!err.is_not_found());
            assert!(err.is_duplicate());
            assert!(err.to_string().contains("Duplicate"));
        }

        #[test]
        fn connection_error() {
            let err = RepositoryError::connection("Connection refused");
            assert!(err.to_string().contains("Connection"));
            assert!(err.to_string().contains("refused"));
        }

        #[test]
        fn query_error() {
            let err = RepositoryError::query("Invalid SQL");
            assert!(err.to_string().contains("Query"));
            assert!(err.to_string().contains("Invalid SQL"));
        }

        #[test]
        fn serialization_error() {
            let err = RepositoryError::serialization("bad region");
            assert!(err.to_string().contains("Serialization"));
        }

        #[test]
        fn internal_error() {
            let err = RepositoryError::internal("Unexpected state");
            assert!(err.to_string().contains("Internal"));
        }
    }
}
