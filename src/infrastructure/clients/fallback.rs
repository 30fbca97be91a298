//! # Fallback Policy
//!
//! Decides what a lookup client does when its remote service is unavailable.
//!
//! # Examples
//!
//! ```
//! use tour_ratings::infrastructure::clients::error::ClientError;
//! use tour_ratings::infrastructure::clients::fallback::FallbackPolicy;
//!
//! let failed: Result<Vec<u8>, _> = Err(ClientError::timeout("GUESTSERVICES", "slow"));
//! let recovered = FallbackPolicy::UseFallback.apply(failed, Vec::new);
//! assert_eq!(recovered.unwrap(), Vec::<u8>::new());
//!
//! let failed: Result<Vec<u8>, _> = Err(ClientError::timeout("ROOMSERVICES", "slow"));
//! assert!(FallbackPolicy::Propagate.apply(failed, Vec::new).is_err());
//! ```

use crate::infrastructure::clients::error::ClientResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when a remote service is unavailable.
///
/// Only failures for which [`ClientError::is_unavailable`] holds are ever
/// substituted. A "not found" answer, a malformed response or a server
/// fault always propagates.
///
/// [`ClientError::is_unavailable`]: crate::infrastructure::clients::error::ClientError::is_unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Return the failure to the caller.
    #[default]
    Propagate,
    /// Substitute the fallback value.
    UseFallback,
}

impl FallbackPolicy {
    /// Applies the policy to the outcome of a remote call.
    ///
    /// # Errors
    ///
    /// Returns the original error unless the policy is
    /// [`FallbackPolicy::UseFallback`] and the error is an unavailability.
    pub fn apply<T>(self, result: ClientResult<T>, fallback: impl FnOnce() -> T) -> ClientResult<T> {
        match (self, result) {
            (_, Ok(value)) => Ok(value),
            (Self::UseFallback, Err(e)) if e.is_unavailable() => {
                tracing::warn!(error = %e, "remote service unavailable, using fallback");
                Ok(fallback())
            }
            (_, Err(e)) => Err(e),
        }
    }

    /// Returns true if this policy substitutes fallback values.
    #[must_use]
    pub fn uses_fallback(self) -> bool {
        matches!(self, Self::UseFallback)
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::UseFallback => write!(f, "use_fallback"),
        }
    }
}
