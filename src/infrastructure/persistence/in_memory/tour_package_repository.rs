//! # In-Memory Tour Package Repository
//!
//! In-memory implementation of [`TourPackageRepository`].

use crate::domain::entities::TourPackage;
use crate::infrastructure::persistence::traits::{RepositoryResult, TourPackageRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TourPackageRepository`], keyed by code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTourPackageRepository {
    storage: Arc<RwLock<BTreeMap<String, TourPackage>>>,
}

impl InMemoryTourPackageRepository {
    /// Creates a new empty in-memory package repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TourPackageRepository for InMemoryTourPackageRepository {
    async fn save(&self, package: &TourPackage) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(package.code().to_string(), package.clone());
        Ok(())
    }

    async fn get(&self, code: &str) -> RepositoryResult<Option<TourPackage>> {
        let storage = self.storage.read().await;
        Ok(storage.get(code).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<TourPackage>> {
        let storage = self.storage.read().await;
        Ok(storage.values().find(|p| p.name() == name).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<TourPackage>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_by_name_is_exact() {
        let repo = InMemoryTourPackageRepository::new();
        repo.save(&TourPackage::new("BC", "Backpack Cal")).await.unwrap();
        repo.save(&TourPackage::new("CC", "California Calm")).await.unwrap();

        let found = repo.find_by_name("California Calm").await.unwrap();
        assert_eq!(found.map(|p| p.code().to_string()), Some("CC".to_string()));
        assert!(repo.find_by_name("california calm").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_by_code() {
        let repo = InMemoryTourPackageRepository::new();
        repo.save(&TourPackage::new("BC", "Old")).await.unwrap();
        repo.save(&TourPackage::new("BC", "New")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.get("BC").await.unwrap().unwrap().name(), "New");
    }
}
