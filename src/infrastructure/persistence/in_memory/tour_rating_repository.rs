//! # In-Memory Tour Rating Repository
//!
//! In-memory implementation of [`TourRatingRepository`].
//!
//! Ratings are held in a `BTreeMap` keyed by [`TourRatingPk`], so the ratings
//! of one tour form a contiguous range already ordered by customer id.

use crate::domain::entities::TourRating;
use crate::domain::value_objects::{CustomerId, TourId, TourRatingPk};
use crate::infrastructure::persistence::pagination::{Page, PageRequest};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TourRatingRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`TourRatingRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTourRatingRepository {
    storage: Arc<RwLock<BTreeMap<TourRatingPk, TourRating>>>,
}

impl InMemoryTourRatingRepository {
    /// Creates a new empty in-memory rating repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of ratings in the repository.
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

    /// Clears all ratings from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    fn tour_range(tour_id: TourId) -> RangeInclusive<TourRatingPk> {
        TourRatingPk::new(tour_id, CustomerId::new(i32::MIN))
            ..=TourRatingPk::new(tour_id, CustomerId::new(i32::MAX))
    }
}

#[async_trait]
impl TourRatingRepository for InMemoryTourRatingRepository {
    async fn insert(&self, rating: &TourRating) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        match storage.entry(rating.pk()) {
            Entry::Occupied(entry) => Err(RepositoryError::duplicate(
                "TourRating",
                entry.key().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(rating.clone());
                Ok(())
            }
        }
    }

    async fn save(&self, rating: &TourRating) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(rating.pk(), rating.clone());
        Ok(())
    }

    async fn get(&self, pk: &TourRatingPk) -> RepositoryResult<Option<TourRating>> {
        let storage = self.storage.read().await;
        Ok(storage.get(pk).cloned())
    }

    async fn find_by_tour(&self, tour_id: TourId) -> RepositoryResult<Vec<TourRating>> {
        let storage = self.storage.read().await;
        Ok(storage
            .range(Self::tour_range(tour_id))
            .map(|(_, rating)| rating.clone())
            .collect())
    }

    async fn find_page_by_tour(
        &self,
        tour_id: TourId,
        request: PageRequest,
    ) -> RepositoryResult<Page<TourRating>> {
        let storage = self.storage.read().await;
        let total = storage.range(Self::tour_range(tour_id)).count() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = storage
            .range(Self::tour_range(tour_id))
            .skip(offset)
            .take(request.size() as usize)
            .map(|(_, rating)| rating.clone())
            .collect();
        Ok(Page::new(content, request, total))
    }

    async fn delete(&self, pk: &TourRatingPk) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(pk).is_some())
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
    use crate::domain::value_objects::Score;

    fn rating(tour: i32, customer: i32, score: i32) -> TourRating {
        TourRating::new(
            TourRatingPk::new(TourId::new(tour), CustomerId::new(customer)),
            Score::new(score).unwrap(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryTourRatingRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryTourRatingRepository::new();
        let r = rating(1, 10, 4);

        repo.insert(&r).await.unwrap();

        let retrieved = repo.get(&r.pk()).await.unwrap();
        assert_eq!(retrieved, Some(r));
    }

    #[tokio::test]
    async fn insert_duplicate_is_rejected() {
        let repo = InMemoryTourRatingRepository::new();
        repo.insert(&rating(1, 10, 4)).await.unwrap();

        let err = repo.insert(&rating(1, 10, 1)).await.unwrap_err();
        assert!(err.is_duplicate());

        let kept = repo.get(&rating(1, 10, 0).pk()).await.unwrap().unwrap();
        assert_eq!(kept.score().get(), 4);
    }

    #[tokio::test]
    async fn save_overwrites() {
        let repo = InMemoryTourRatingRepository::new();
        repo.save(&rating(1, 10, 4)).await.unwrap();
        repo.save(&rating(1, 10, 2)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let stored = repo.get(&rating(1, 10, 0).pk()).await.unwrap().unwrap();
        assert_eq!(stored.score().get(), 2);
    }

    #[tokio::test]
    async fn find_by_tour_is_scoped_and_ordered() {
        let repo = InMemoryTourRatingRepository::new();
        repo.save(&rating(2, 5, 1)).await.unwrap();
        repo.save(&rating(1, 30, 3)).await.unwrap();
        repo.save(&rating(1, 10, 4)).await.unwrap();
        repo.save(&rating(1, -7, 5)).await.unwrap();

        let found = repo.find_by_tour(TourId::new(1)).await.unwrap();
        let customers: Vec<i32> = found.iter().map(|r| r.customer_id().get()).collect();
        assert_eq!(customers, vec![-7, 10, 30]);
    }

    #[tokio::test]
    async fn find_page_by_tour() {
        let repo = InMemoryTourRatingRepository::new();
        for customer in 1..=5 {
            repo.save(&rating(1, customer, 3)).await.unwrap();
        }
        repo.save(&rating(2, 1, 3)).await.unwrap();

        let page = repo
            .find_page_by_tour(TourId::new(1), PageRequest::new(1, 2))
            .await
            .unwrap();
        let customers: Vec<i32> = page.content().iter().map(|r| r.customer_id().get()).collect();
        assert_eq!(customers, vec![3, 4]);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 3);

        let beyond = repo
            .find_page_by_tour(TourId::new(1), PageRequest::new(9, 2))
            .await
            .unwrap();
        assert!(beyond.content().is_empty());
        assert_eq!(beyond.total_elements(), 5);
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryTourRatingRepository::new();
        let r = rating(1, 10, 4);
        repo.save(&r).await.unwrap();

        assert!(repo.delete(&r.pk()).await.unwrap());
        assert!(!repo.delete(&r.pk()).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryTourRatingRepository::new();
        repo.save(&rating(1, 1, 1)).await.unwrap();
        repo.save(&rating(1, 2, 1)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
