//! Cart entries and their persisted form.

use serde::{Deserialize, Serialize};
use vitrine_catalog::{Currency, Money, ProductId, Record};

/// One line of the cart.
///
/// Display fields are a snapshot taken when the record was first added;
/// later catalog changes do not reach an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Id of the record this entry was taken from.
    pub id: ProductId,
    /// Name at the time of first addition.
    pub name: String,
    /// Unit price at the time of first addition.
    pub unit_price: Money,
    /// Image reference at the time of first addition.
    pub image_ref: String,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Snapshot a record into a new entry with quantity 1.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            unit_price: record.unit_price,
            image_ref: record.image_ref.clone(),
            quantity: 1,
        }
    }

    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(u64::from(self.quantity))
    }
}

/// Wire shape of an entry in the key-value store.
///
/// Prices are stored as decimals tagged with their currency. The older
/// `price` and `image` field names are accepted on read, an untagged price
/// is read in the cart's currency, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StoredEntry {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "unitPrice", alias = "price", default)]
    pub unit_price: f64,
    #[serde(rename = "imageRef", alias = "image", default)]
    pub image_ref: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl StoredEntry {
    pub(crate) fn from_entry(entry: &CartEntry) -> Self {
        Self {
            id: entry.id.to_signed(),
            name: entry.name.clone(),
            unit_price: entry.unit_price.to_decimal(),
            image_ref: entry.image_ref.clone(),
            quantity: i64::from(entry.quantity),
            currency: Some(entry.unit_price.currency),
        }
    }

    /// Convert back, or `None` when the stored values break entry invariants
    /// or were priced in a currency other than `currency`.
    pub(crate) fn into_entry(self, currency: Currency) -> Option<CartEntry> {
        if self.currency.is_some_and(|stored| stored != currency) {
            return None;
        }
        let id = ProductId::from_signed(self.id)?;
        let quantity = u32::try_from(self.quantity).ok().filter(|q| *q >= 1)?;
        let unit_price = if self.unit_price.is_finite() && self.unit_price > 0.0 {
            Money::from_decimal(self.unit_price, currency)
        } else {
            Money::zero(currency)
        };

        Some(CartEntry {
            id,
            name: self.name,
            unit_price,
            image_ref: self.image_ref,
            quantity,
        })
    }
}
