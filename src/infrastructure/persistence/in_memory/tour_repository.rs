//! # In-Memory Tour Repository
//!
//! In-memory implementation of [`TourRepository`].

use crate::domain::entities::Tour;
use crate::domain::value_objects::TourId;
use crate::infrastructure::persistence::traits::{RepositoryResult, TourRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TourRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTourRepository {
    storage: Arc<RwLock<BTreeMap<TourId, Tour>>>,
}

impl InMemoryTourRepository {
    /// Creates a new empty in-memory tour repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tours in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TourRepository for InMemoryTourRepository {
    async fn save(&self, tour: &Tour) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(tour.id(), tour.clone());
        Ok(())
    }

    async fn get(&self, id: TourId) -> RepositoryResult<Option<Tour>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Tour>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
