//! Derived cart totals.

use serde::{Deserialize, Serialize};
use vitrine_catalog::{Currency, Money};

use crate::entry::CartEntry;

/// Totals computed from the current entries. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all quantities.
    pub total_items: u64,
    /// Sum of `unit_price * quantity` over all entries.
    pub total_price: Money,
}

impl CartTotals {
    /// Compute totals over a set of entries priced in `currency`.
    ///
    /// Callers keep every entry in `currency`; `CartStore::add` refuses
    /// records priced in anything else.
    pub(crate) fn from_entries(entries: &[CartEntry], currency: Currency) -> Self {
        debug_assert!(entries.iter().all(|e| e.unit_price.currency == currency));
        let total_items = entries.iter().map(|e| u64::from(e.quantity)).sum();
        let total_cents = entries
            .iter()
            .map(|e| e.subtotal().amount_cents)
            .fold(0_i64, i64::saturating_add);
        Self {
            total_items,
            total_price: Money::new(total_cents, currency),
        }
    }

    /// Totals of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self {
            total_items: 0,
            total_price: Money::zero(currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::ProductId;

    fn entry(id: u64, cents: i64, quantity: u32) -> CartEntry {
        CartEntry {
            id: ProductId::new(id).unwrap(),
            name: format!("item-{}", id),
            unit_price: Money::new(cents, Currency::BRL),
            image_ref: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_totals() {
        let entries = [entry(1, 1550, 2), entry(2, 2200, 1)];
        let totals = CartTotals::from_entries(&entries, Currency::BRL);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price.amount_cents, 5300);
    }

    #[test]
    fn test_totals_exact_to_the_cent() {
        // 0.10 * 3 drifts in binary floating point; cents do not
        let entries = [entry(1, 10, 3), entry(2, 20, 1)];
        let totals = CartTotals::from_entries(&entries, Currency::BRL);
        assert_eq!(totals.total_price.display(), "R$ 0.50");
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(
            CartTotals::from_entries(&[], Currency::BRL),
            CartTotals::empty(Currency::BRL)
        );
    }
}
