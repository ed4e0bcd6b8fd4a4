//! Newtype identifier for catalog records.
//!
//! Feed ids are positive integers. Wrapping them keeps a record id from being
//! confused with a quantity or a row number.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The value cannot identify a record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid product id: {0} (expected 1 to {max})", max = i64::MAX)]
pub struct InvalidProductId(pub u64);

/// Identifier of a catalog record, as read from the feed's id column.
///
/// Always in `1..=i64::MAX`, so it survives any signed integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProductId(u64);

impl ProductId {
    /// Largest representable id.
    pub const MAX: ProductId = ProductId(i64::MAX as u64);

    /// Create an id, or `None` when `id` is `0` or above [`ProductId::MAX`].
    pub fn new(id: u64) -> Option<Self> {
        (1..=Self::MAX.0).contains(&id).then_some(Self(id))
    }

    /// Build an id from a possibly non-positive integer.
    ///
    /// Returns `None` for `0` and negatives, which never identify a record.
    pub fn from_signed(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().and_then(Self::new)
    }

    /// Get the raw integer value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id as a signed integer. Lossless: ids never exceed `i64::MAX`.
    pub fn to_signed(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for ProductId {
    type Error = InvalidProductId;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(InvalidProductId(id))
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
