//! # PostgreSQL Catalog Repositories
//!
//! PostgreSQL implementations of [`TourRepository`] and
//! [`TourPackageRepository`]. Enum columns are stored as their display text.

use crate::domain::entities::{Tour, TourPackage};
use crate::domain::value_objects::{Difficulty, Region, TourId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TourPackageRepository, TourRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

/// PostgreSQL implementation of [`TourRepository`].
#[derive(Debug, Clone)]
pub struct PostgresTourRepository {
    pool: PgPool,
}

impl PostgresTourRepository {
    /// Creates a new PostgreSQL tour repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourRepository for PostgresTourRepository {
    async fn save(&self, tour: &Tour) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tour (
                id, title, description, price, duration,
                tour_package_code, difficulty, region
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                duration = EXCLUDED.duration,
                tour_package_code = EXCLUDED.tour_package_code,
                difficulty = EXCLUDED.difficulty,
                region = EXCLUDED.region
            "#,
        )
        .bind(tour.id().get())
        .bind(tour.title())
        .bind(tour.description())
        .bind(tour.price())
        .bind(tour.duration())
        .bind(tour.tour_package_code())
        .bind(tour.difficulty().to_string())
        .bind(tour.region().to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: TourId) -> RepositoryResult<Option<Tour>> {
        let row: Option<TourRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, price, duration,
                   tour_package_code, difficulty, region
            FROM tour
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(TourRow::try_into_tour).transpose()
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Tour>> {
        let rows: Vec<TourRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, price, duration,
                   tour_package_code, difficulty, region
            FROM tour
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(TourRow::try_into_tour).collect()
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tour")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(count.max(0) as u64)
    }
}

/// PostgreSQL implementation of [`TourPackageRepository`].
#[derive(Debug, Clone)]
pub struct PostgresTourPackageRepository {
    pool: PgPool,
}

impl PostgresTourPackageRepository {
    /// Creates a new PostgreSQL package repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourPackageRepository for PostgresTourPackageRepository {
    async fn save(&self, package: &TourPackage) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tour_package (code, name) VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(package.code())
        .bind(package.name())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, code: &str) -> RepositoryResult<Option<TourPackage>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT code, name FROM tour_package WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(row.map(|(code, name)| TourPackage::new(code, name)))
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<TourPackage>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT code, name FROM tour_package WHERE name = $1 LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(row.map(|(code, name)| TourPackage::new(code, name)))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<TourPackage>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT code, name FROM tour_package ORDER BY code ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(code, name)| TourPackage::new(code, name))
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tour_package")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(count.max(0) as u64)
    }
}

/// Row type for tour queries.
#[derive(Debug, sqlx::FromRow)]
struct TourRow {
    id: i32,
    title: String,
    description: String,
    price: i32,
    duration: String,
    tour_package_code: String,
    difficulty: String,
    region: String,
}

impl TourRow {
    /// Converts the row into a Tour.
    fn try_into_tour(self) -> RepositoryResult<Tour> {
        let difficulty = Difficulty::from_str(&self.difficulty)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let region = Region::from_str(&self.region)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        Ok(
            Tour::new(TourId::new(self.id), self.title, self.tour_package_code)
                .with_description(self.description)
                .with_price(self.price)
                .with_duration(self.duration)
                .with_difficulty(difficulty)
                .with_region(region),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(region: &str) -> TourRow {
        TourRow {
            id: 9,
            title: "Channel Islands Excursion".to_string(),
            description: String::new(),
            price: 150,
            duration: "1 day".to_string(),
            tour_package_code: "CC".to_string(),
            difficulty: "Easy".to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn row_conversion() {
        let tour = row("Southern California").try_into_tour().unwrap();
        assert_eq!(tour.id(), TourId::new(9));
        assert_eq!(tour.region(), Region::SouthernCalifornia);
        assert_eq!(tour.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn row_with_unknown_region_is_serialization_error() {
        let err = row("Atlantis").try_into_tour().unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
