//! # Tour Rating Service
//!
//! Create, read, update and delete of tour ratings.
//!
//! Every operation first checks that its target exists: the tour for
//! create/list/average, the (tour, customer) rating for update/delete.
//! Absence is reported as [`ApplicationError::NotFound`]. Writes are persisted
//! immediately, one rating at a time.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use tour_ratings::application::services::TourRatingService;
//!
//! let service = TourRatingService::new(tours, ratings);
//! service.create(TourId::new(1), RatingDto::new(Some(5), None, CustomerId::new(9))).await?;
//! let average = service.average(TourId::new(1)).await?;
//! ```

use crate::application::dto::RatingDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::TourRating;
use crate::domain::value_objects::{CustomerId, TourId, TourRatingPk};
use crate::infrastructure::persistence::{
    Page, PageRequest, TourRatingRepository, TourRepository,
};
use std::sync::Arc;

/// Computes the arithmetic mean of the ratings' scores.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn average_score(ratings: &[TourRating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(r.score().get())).sum();
    Some(sum as f64 / ratings.len() as f64)
}

/// Application service for tour ratings.
#[derive(Debug, Clone)]
pub struct TourRatingService {
    tours: Arc<dyn TourRepository>,
    ratings: Arc<dyn TourRatingRepository>,
}

impl TourRatingService {
    /// Creates the service over the given stores.
    #[must_use]
    pub fn new(tours: Arc<dyn TourRepository>, ratings: Arc<dyn TourRatingRepository>) -> Self {
        Self { tours, ratings }
    }

    /// Stores a new rating for an existing tour.
    ///
    /// # Errors
    ///
    /// - `Domain` if the score is missing or invalid, or the comment too long
    /// - `NotFound` if the tour does not exist
    /// - `Conflict` if the customer already rated this tour
    pub async fn create(&self, tour_id: TourId, dto: RatingDto) -> ApplicationResult<()> {
        let score = dto.required_score()?;
        self.verify_tour(tour_id).await?;

        let pk = TourRatingPk::new(tour_id, dto.customer_id);
        let rating = TourRating::new(pk, score, dto.comment)?;
        self.ratings.insert(&rating).await?;

        tracing::info!(%pk, score = %score, "tour rating created");
        Ok(())
    }

    /// Returns one page of a tour's ratings, ascending by customer id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tour does not exist.
    pub async fn list_by_tour(
        &self,
        tour_id: TourId,
        request: PageRequest,
    ) -> ApplicationResult<Page<RatingDto>> {
        self.verify_tour(tour_id).await?;
        let page = self.ratings.find_page_by_tour(tour_id, request).await?;
        Ok(page.map(|rating| RatingDto::from(&rating)))
    }

    /// Returns the mean score of a tour, or `None` if it has no ratings.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the tour does not exist.
    pub async fn average(&self, tour_id: TourId) -> ApplicationResult<Option<f64>> {
        self.verify_tour(tour_id).await?;
        let ratings = self.ratings.find_by_tour(tour_id).await?;
        Ok(average_score(&ratings))
    }

    /// Overwrites score and comment of an existing rating.
    ///
    /// An absent comment clears the stored one.
    ///
    /// # Errors
    ///
    /// - `Domain` if the score is missing or invalid, or the comment too long
    /// - `NotFound` if no rating exists for (tour, customer)
    pub async fn replace(&self, tour_id: TourId, dto: RatingDto) -> ApplicationResult<RatingDto> {
        let score = dto.required_score()?;
        let mut rating = self.verify_rating(tour_id, dto.customer_id).await?;

        rating.set_score(score);
        rating.set_comment(dto.comment)?;
        self.ratings.save(&rating).await?;

        tracing::info!(pk = %rating.pk(), "tour rating replaced");
        Ok(RatingDto::from(&rating))
    }

    /// Updates only the fields present in `dto`.
    ///
    /// # Errors
    ///
    /// - `Domain` if a present field is invalid
    /// - `NotFound` if no rating exists for (tour, customer)
    pub async fn update(&self, tour_id: TourId, dto: RatingDto) -> ApplicationResult<RatingDto> {
        let score = dto.validated_score()?;
        let mut rating = self.verify_rating(tour_id, dto.customer_id).await?;

        if let Some(score) = score {
            rating.set_score(score);
        }
        if dto.comment.is_some() {
            rating.set_comment(dto.comment)?;
        }
        self.ratings.save(&rating).await?;

        tracing::info!(pk = %rating.pk(), "tour rating updated");
        Ok(RatingDto::from(&rating))
    }

    /// Removes a rating.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no rating exists for (tour, customer).
    pub async fn delete(&self, tour_id: TourId, customer_id: CustomerId) -> ApplicationResult<()> {
        let rating = self.verify_rating(tour_id, customer_id).await?;
        if !self.ratings.delete(&rating.pk()).await? {
            return Err(Self::rating_not_found(rating.pk()));
        }

        tracing::info!(pk = %rating.pk(), "tour rating deleted");
        Ok(())
    }

    async fn verify_tour(&self, tour_id: TourId) -> ApplicationResult<()> {
        match self.tours.get(tour_id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("Tour", tour_id.to_string())),
        }
    }

    async fn verify_rating(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
    ) -> ApplicationResult<TourRating> {
        let pk = TourRatingPk::new(tour_id, customer_id);
        self.ratings
            .get(&pk)
            .await?
            .ok_or_else(|| Self::rating_not_found(pk))
    }

    fn rating_not_found(pk: TourRatingPk) -> ApplicationError {
        ApplicationError::not_found("TourRating", pk.to_string())
    }
}
