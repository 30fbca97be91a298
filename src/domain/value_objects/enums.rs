//! # Domain Enums
//!
//! Enumeration types describing tours.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::domain::value_objects::enums::{Difficulty, Region};
//! use std::str::FromStr;
//!
//! assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
//! assert_eq!(Region::from_str("Central Coast").unwrap(), Region::CentralCoast);
//! assert_eq!(Region::NorthernCalifornia.label(), "Northern California");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How demanding a tour is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for everyone.
    Easy,
    /// Some fitness required.
    Medium,
    /// Strenuous.
    Difficult,
    /// Depends on the chosen options.
    Varies,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Difficult => write!(f, "Difficult"),
            Self::Varies => write!(f, "Varies"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EASY" => Ok(Self::Easy),
            "MEDIUM" => Ok(Self::Medium),
            "DIFFICULT" => Ok(Self::Difficult),
            "VARIES" => Ok(Self::Varies),
            _ => Err(ParseEnumError::InvalidValue("Difficulty", s.to_string())),
        }
    }
}

/// Region a tour takes place in.
///
/// Serialized by its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// The central coast.
    #[serde(rename = "Central Coast")]
    CentralCoast,
    /// Southern California.
    #[serde(rename = "Southern California")]
    SouthernCalifornia,
    /// Northern California.
    #[serde(rename = "Northern California")]
    NorthernCalifornia,
    /// Spans several regions.
    #[serde(rename = "Varies")]
    Varies,
}

impl Region {
    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CentralCoast => "Central Coast",
            Self::SouthernCalifornia => "Southern California",
            Self::NorthernCalifornia => "Northern California",
            Self::Varies => "Varies",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', '_'], " ").as_str() {
            "CENTRAL COAST" => Ok(Self::CentralCoast),
            "SOUTHERN CALIFORNIA" => Ok(Self::SouthernCalifornia),
            "NORTHERN CALIFORNIA" => Ok(Self::NorthernCalifornia),
            "VARIES" => Ok(Self::Varies),
            _ => Err(ParseEnumError::InvalidValue("Region", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
