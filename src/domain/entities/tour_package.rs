//! # Tour Package Entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of tours, identified by a short code such as `"BC"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TourPackage {
    code: String,
    name: String,
}

impl TourPackage {
    /// Creates a tour package.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns the package code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TourPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
