//! Strongly-typed identifiers for domain entities
//!
//! Customer identifiers are 32-bit unsigned numbers on the wire. Wrapping them
//! in a newtype keeps them from being mixed up with other integers such as
//! state codes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a customer record
///
/// Zero is reserved as "no identifier" and is never produced by
/// [`CustomerId::random`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

impl CustomerId {
    /// Wraps a caller-supplied identifier
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a new pseudo-random, non-zero identifier
    ///
    /// The value is not guaranteed to be unique. Stores reject duplicates on
    /// insert, and retrying with a fresh identifier is up to the caller.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(1..=u32::MAX))
    }

    /// Returns the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns true for the reserved zero identifier
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| CoreError::invalid_identifier(format!("{s:?}: {e}")))
    }
}

impl From<u32> for CustomerId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<CustomerId> for u32 {
    fn from(id: CustomerId) -> u32 {
        id.0
    }
}
