//! # PostgreSQL Tour Rating Repository
//!
//! PostgreSQL implementation of [`TourRatingRepository`] using sqlx.
//!
//! Ratings live in the `tour_rating` table whose primary key is
//! `(tour_id, customer_id)`.

use crate::domain::entities::TourRating;
use crate::domain::value_objects::{CustomerId, Score, TourId, TourRatingPk};
use crate::infrastructure::persistence::pagination::{Page, PageRequest};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TourRatingRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of [`TourRatingRepository`].
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use tour_ratings::infrastructure::persistence::postgres::PostgresTourRatingRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresTourRatingRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresTourRatingRepository {
    pool: PgPool,
}

impl PostgresTourRatingRepository {
    /// Creates a new PostgreSQL rating repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TourRatingRepository for PostgresTourRatingRepository {
    async fn insert(&self, rating: &TourRating) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO tour_rating (tour_id, customer_id, score, comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tour_id, customer_id) DO NOTHING
            "#,
        )
        .bind(rating.tour_id().get())
        .bind(rating.customer_id().get())
        .bind(rating.score().get())
        .bind(rating.comment())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::duplicate(
                "TourRating",
                rating.pk().to_string(),
            ));
        }
        Ok(())
    }

    async fn save(&self, rating: &TourRating) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tour_rating (tour_id, customer_id, score, comment)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tour_id, customer_id)
            DO UPDATE SET score = EXCLUDED.score, comment = EXCLUDED.comment
            "#,
        )
        .bind(rating.tour_id().get())
        .bind(rating.customer_id().get())
        .bind(rating.score().get())
        .bind(rating.comment())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, pk: &TourRatingPk) -> RepositoryResult<Option<TourRating>> {
        let row: Option<TourRatingRow> = sqlx::query_as(
            r#"
            SELECT tour_id, customer_id, score, comment
            FROM tour_rating
            WHERE tour_id = $1 AND customer_id = $2
            "#,
        )
        .bind(pk.tour_id().get())
        .bind(pk.customer_id().get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(TourRatingRow::try_into_rating).transpose()
    }

    async fn find_by_tour(&self, tour_id: TourId) -> RepositoryResult<Vec<TourRating>> {
        let rows: Vec<TourRatingRow> = sqlx::query_as(
            r#"
            SELECT tour_id, customer_id, score, comment
            FROM tour_rating
            WHERE tour_id = $1
            ORDER BY customer_id ASC
            "#,
        )
        .bind(tour_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter()
            .map(TourRatingRow::try_into_rating)
            .collect()
    }

    async fn find_page_by_tour(
        &self,
        tour_id: TourId,
        request: PageRequest,
    ) -> RepositoryResult<Page<TourRating>> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM tour_rating WHERE tour_id = $1")
                .bind(tour_id.get())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::query(e.to_string()))?;

        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let rows: Vec<TourRatingRow> = sqlx::query_as(
            r#"
            SELECT tour_id, customer_id, score, comment
            FROM tour_rating
            WHERE tour_id = $1
            ORDER BY customer_id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tour_id.get())
        .bind(i64::from(request.size()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        let content = rows
            .into_iter()
            .map(TourRatingRow::try_into_rating)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Page::new(content, request, total.max(0) as u64))
    }

    async fn delete(&self, pk: &TourRatingPk) -> RepositoryResult<bool> {
        let result =
            sqlx::query("DELETE FROM tour_rating WHERE tour_id = $1 AND customer_id = $2")
                .bind(pk.tour_id().get())
                .bind(pk.customer_id().get())
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tour_rating")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(count.max(0) as u64)
    }
}

/// Row type for rating queries.
#[derive(Debug, sqlx::FromRow)]
struct TourRatingRow {
    tour_id: i32,
    customer_id: i32,
    score: i32,
    comment: Option<String>,
}

impl TourRatingRow {
    /// Converts the row into a TourRating.
    fn try_into_rating(self) -> RepositoryResult<TourRating> {
        let score =
            Score::new(self.score).map_err(|e| RepositoryError::serialization(e.to_string()))?;
        Ok(TourRating::from_parts(
            TourRatingPk::new(TourId::new(self.tour_id), CustomerId::new(self.customer_id)),
            score,
            self.comment,
        ))
    }
}
