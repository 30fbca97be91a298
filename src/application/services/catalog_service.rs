//! # Catalog Service
//!
//! Read-only queries over tours and tour packages, plus startup seeding.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Tour, TourPackage};
use crate::domain::value_objects::TourId;
use crate::infrastructure::persistence::{TourPackageRepository, TourRepository};
use serde::Deserialize;
use std::sync::Arc;

/// Catalog content loaded at startup.
///
/// ```json
/// { "packages": [{"code": "BC", "name": "Backpack Cal"}],
///   "tours": [{"id": 1, "title": "Big Sur Retreat", "tourPackageCode": "BC"}] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    /// Packages to store.
    #[serde(default)]
    pub packages: Vec<TourPackage>,
    /// Tours to store.
    #[serde(default)]
    pub tours: Vec<Tour>,
}

/// Application service for the tour catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    tours: Arc<dyn TourRepository>,
    packages: Arc<dyn TourPackageRepository>,
}

impl CatalogService {
    /// Creates the service over the given stores.
    #[must_use]
    pub fn new(tours: Arc<dyn TourRepository>, packages: Arc<dyn TourPackageRepository>) -> Self {
        Self { tours, packages }
    }

    /// Returns every tour, ascending by id.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_tours(&self) -> ApplicationResult<Vec<Tour>> {
        Ok(self.tours.get_all().await?)
    }

    /// Returns one tour.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tour does not exist.
    pub async fn get_tour(&self, id: TourId) -> ApplicationResult<Tour> {
        self.tours
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Tour", id.to_string()))
    }

    /// Returns every package, ascending by code.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_packages(&self) -> ApplicationResult<Vec<TourPackage>> {
        Ok(self.packages.get_all().await?)
    }

    /// Returns one package by code.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the package does not exist.
    pub async fn get_package(&self, code: &str) -> ApplicationResult<TourPackage> {
        self.packages
            .get(code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("TourPackage", code))
    }

    /// Returns the package with exactly this name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no package has this name.
    pub async fn find_package_by_name(&self, name: &str) -> ApplicationResult<TourPackage> {
        self.packages
            .find_by_name(name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("TourPackage", name))
    }

    /// Stores the packages and tours of a seed. Existing entries are overwritten.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn seed(&self, seed: &CatalogSeed) -> ApplicationResult<()> {
        for package in &seed.packages {
            self.packages.save(package).await?;
        }
        for tour in &seed.tours {
            self.tours.save(tour).await?;
        }
        tracing::info!(
            packages = seed.packages.len(),
            tours = seed.tours.len(),
            "catalog seeded"
        );
        Ok(())
    }
}
