//! # Data Transfer Objects
//!
//! Wire shapes exchanged with API clients.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::application::dto::RatingDto;
//!
//! let dto: RatingDto = serde_json::from_str(r#"{"score": 4, "customerId": 7}"#).unwrap();
//! assert_eq!(dto.score, Some(4));
//! assert!(dto.comment.is_none());
//! ```

use crate::domain::entities::TourRating;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CustomerId, Score};
use serde::{Deserialize, Serialize};

/// External representation of a rating, used for input and output.
///
/// `score` and `comment` are independently optional so the same shape can
/// carry a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    /// Score in `0..=5`.
    #[serde(default)]
    pub score: Option<i32>,
    /// Free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Customer who gave the rating.
    pub customer_id: CustomerId,
}

impl RatingDto {
    /// Creates a DTO.
    #[must_use]
    pub fn new(score: Option<i32>, comment: Option<String>, customer_id: CustomerId) -> Self {
        Self {
            score,
            comment,
            customer_id,
        }
    }

    /// Validates the fields that are present and returns the score, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScore` or `DomainError::CommentTooLong`.
    pub fn validated_score(&self) -> DomainResult<Option<Score>> {
        TourRating::validate_comment(self.comment.as_deref())?;
        self.score.map(Score::new).transpose()
    }

    /// Validates the DTO for a create or full update, where the score is required.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the score is absent, otherwise
    /// the errors of [`RatingDto::validated_score`].
    pub fn required_score(&self) -> DomainResult<Score> {
        self.validated_score()?
            .ok_or(DomainError::MissingField("score"))
    }
}

impl From<&TourRating> for RatingDto {
    fn from(rating: &TourRating) -> Self {
        Self {
            score: Some(rating.score().get()),
            comment: rating.comment().map(str::to_string),
            customer_id: rating.customer_id(),
        }
    }
}

/// Average score of a tour.
///
/// Serialized as `{"average": number}` or `{"average": null}` when the tour
/// has no ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageDto {
    /// Mean score, absent when there are no ratings.
    pub average: Option<f64>,
}
