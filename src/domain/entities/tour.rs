//! # Tour Entity
//!
//! A tour offered in the catalog. Ratings reference tours by id; tours are
//! never mutated by the rating subsystem.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::entities::Tour;
//! use tour_ratings::domain::value_objects::{Difficulty, Region, TourId};
//!
//! let tour = Tour::new(TourId::new(1), "Big Sur Retreat", "BC")
//!     .with_price(750)
//!     .with_difficulty(Difficulty::Medium)
//!     .with_region(Region::CentralCoast);
//!
//! assert_eq!(tour.tour_package_code(), "BC");
//! assert_eq!(tour.price(), 750);
//! ```

use crate::domain::value_objects::{Difficulty, Region, TourId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    id: TourId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: i32,
    #[serde(default)]
    duration: String,
    tour_package_code: String,
    #[serde(default = "default_difficulty")]
    difficulty: Difficulty,
    #[serde(default = "default_region")]
    region: Region,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Varies
}

fn default_region() -> Region {
    Region::Varies
}

impl Tour {
    /// Creates a tour with the required fields; the rest take defaults.
    #[must_use]
    pub fn new(
        id: TourId,
        title: impl Into<String>,
        tour_package_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price: 0,
            duration: String::new(),
            tour_package_code: tour_package_code.into(),
            difficulty: Difficulty::Varies,
            region: Region::Varies,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn with_price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Sets the duration label (e.g. "3 days").
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Returns the id.
    #[must_use]
    pub fn id(&self) -> TourId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the price.
    #[must_use]
    pub fn price(&self) -> i32 {
        self.price
    }

    /// Returns the duration label.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the code of the package this tour belongs to.
    #[must_use]
    pub fn tour_package_code(&self) -> &str {
        &self.tour_package_code
    }

    /// Returns the difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the region.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour({}, {})", self.id, self.title)
    }
}
