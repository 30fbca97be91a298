//! # Score Value Object
//!
//! A validated rating score between [`Score::MIN`] and [`Score::MAX`].
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::value_objects::Score;
//!
//! let score = Score::new(4).unwrap();
//! assert_eq!(score.get(), 4);
//! assert!(Score::new(6).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating score.
///
/// # Invariants
///
/// - `MIN <= value <= MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(i32);

impl Score {
    /// Lowest accepted score.
    pub const MIN: i32 = 0;
    /// Highest accepted score.
    pub const MAX: i32 = 5;

    /// Creates a score after checking the accepted range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScore` if `value` is out of range.
    pub fn new(value: i32) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidScore(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
