//! # Tour Rating Entity
//!
//! A customer's score and optional comment for a tour.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::entities::TourRating;
//! use tour_ratings::domain::value_objects::{CustomerId, Score, TourId, TourRatingPk};
//!
//! let pk = TourRatingPk::new(TourId::new(1), CustomerId::new(100));
//! let rating = TourRating::new(pk, Score::new(5).unwrap(), Some("Great".into())).unwrap();
//!
//! assert_eq!(rating.score().get(), 5);
//! assert_eq!(rating.comment(), Some("Great"));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CustomerId, Score, TourId, TourRatingPk};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rating of a tour by a customer.
///
/// # Invariants
///
/// - Keyed by (tour, customer); the key never changes after creation
/// - Score is within [`Score::MIN`]..=[`Score::MAX`]
/// - Comment is at most [`TourRating::MAX_COMMENT_LENGTH`] characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRating {
    pk: TourRatingPk,
    score: Score,
    comment: Option<String>,
}

impl TourRating {
    /// Maximum comment length in characters.
    pub const MAX_COMMENT_LENGTH: usize = 255;

    /// Creates a rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CommentTooLong` if the comment exceeds
    /// [`Self::MAX_COMMENT_LENGTH`].
    pub fn new(pk: TourRatingPk, score: Score, comment: Option<String>) -> DomainResult<Self> {
        Self::validate_comment(comment.as_deref())?;
        Ok(Self { pk, score, comment })
    }

    /// Rebuilds a rating from stored parts without validation.
    #[must_use]
    pub fn from_parts(pk: TourRatingPk, score: Score, comment: Option<String>) -> Self {
        Self { pk, score, comment }
    }

    /// Checks a comment against the length limit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CommentTooLong` if the comment is too long.
    pub fn validate_comment(comment: Option<&str>) -> DomainResult<()> {
        if let Some(comment) = comment {
            let length = comment.chars().count();
            if length > Self::MAX_COMMENT_LENGTH {
                return Err(DomainError::CommentTooLong {
                    length,
                    max: Self::MAX_COMMENT_LENGTH,
                });
            }
        }
        Ok(())
    }

    /// Returns the composite key.
    #[inline]
    #[must_use]
    pub fn pk(&self) -> TourRatingPk {
        self.pk
    }

    /// Returns the rated tour.
    #[inline]
    #[must_use]
    pub fn tour_id(&self) -> TourId {
        self.pk.tour_id()
    }

    /// Returns the rating customer.
    #[inline]
    #[must_use]
    pub fn customer_id(&self) -> CustomerId {
        self.pk.customer_id()
    }

    /// Returns the score.
    #[inline]
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the comment, if any.
    #[inline]
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replaces the score.
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    /// Replaces the comment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CommentTooLong` if the comment is too long;
    /// the rating is left unchanged.
    pub fn set_comment(&mut self, comment: Option<String>) -> DomainResult<()> {
        Self::validate_comment(comment.as_deref())?;
        self.comment = comment;
        Ok(())
    }
}

impl fmt::Display for TourRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TourRating({}, score={})", self.pk, self.score)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pk() -> TourRatingPk {
        TourRatingPk::new(TourId::new(1), CustomerId::new(2))
    }

    #[test]
    fn new_accepts_max_length_comment() {
        let comment = "x".repeat(TourRating::MAX_COMMENT_LENGTH);
        assert!(TourRating::new(pk(), Score::new(3).unwrap(), Some(comment)).is_ok());
    }

    #[test]
    fn new_rejects_long_comment() {
        let comment = "x".repeat(TourRating::MAX_COMMENT_LENGTH + 1);
        let err = TourRating::new(pk(), Score::new(3).unwrap(), Some(comment)).unwrap_err();
        assert!(matches!(err, DomainError::CommentTooLong { length: 256, .. }));
    }

    #[test]
    fn comment_length_counts_characters() {
        let comment = "é".repeat(TourRating::MAX_COMMENT_LENGTH);
        assert!(TourRating::validate_comment(Some(&comment)).is_ok());
    }

    #[test]
    fn set_comment_rejects_without_mutation() {
        let mut rating = TourRating::new(pk(), Score::new(3).unwrap(), Some("ok".into())).unwrap();
        let result = rating.set_comment(Some("y".repeat(400)));
        assert!(result.is_err());
        assert_eq!(rating.comment(), Some("ok"));
    }

    #[test]
    fn accessors_follow_key() {
        let rating = TourRating::new(pk(), Score::new(4).unwrap(), None).unwrap();
        assert_eq!(rating.tour_id(), TourId::new(1));
        assert_eq!(rating.customer_id(), CustomerId::new(2));
        assert!(rating.comment().is_none());
        assert!(rating.to_string().contains("customer 2"));
    }
}
