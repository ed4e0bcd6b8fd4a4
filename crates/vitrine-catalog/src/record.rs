//! Catalog record type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product-like row of the feed, after normalization.
///
/// Records are immutable once parsed. `id` is always positive and `name` is
/// never empty; blank source cells have already been replaced by placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Identifier from the feed's id column.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Price of one unit, never negative.
    pub unit_price: Money,
    /// Image URI or path; may be empty.
    pub image_ref: String,
}

impl Record {
    /// Create a record.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}
