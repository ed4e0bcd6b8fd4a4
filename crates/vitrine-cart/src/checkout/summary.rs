//! Order summary built from cart entries and totals.

use serde::{Deserialize, Serialize};
use vitrine_catalog::Money;

use crate::entry::CartEntry;
use crate::error::CartError;
use crate::totals::CartTotals;

/// One line of an order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

/// Read-only view of a cart for checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Lines in cart order.
    pub lines: Vec<OrderLine>,
    /// Sum of quantities.
    pub total_items: u64,
    /// Grand total.
    pub total: Money,
}

impl OrderSummary {
    /// Project entries and totals into a summary.
    ///
    /// Fails with [`CartError::EmptyCart`] when there is nothing to order.
    pub fn project(entries: &[CartEntry], totals: &CartTotals) -> Result<Self, CartError> {
        if entries.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let lines = entries
            .iter()
            .map(|entry| OrderLine {
                name: entry.name.clone(),
                quantity: entry.quantity,
                unit_price: entry.unit_price,
                subtotal: entry.subtotal(),
            })
            .collect();

        Ok(Self {
            lines,
            total_items: totals.total_items,
            total: totals.total_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::{Currency, ProductId};

    #[test]
    fn test_project() {
        let entries = vec![CartEntry {
            id: ProductId::new(1).unwrap(),
            name: "Bolo".to_string(),
            unit_price: Money::new(1550, Currency::BRL),
            image_ref: String::new(),
            quantity: 2,
        }];
        let totals = CartTotals::from_entries(&entries, Currency::BRL);

        let summary = OrderSummary::project(&entries, &totals).unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].subtotal.amount_cents, 3100);
        assert_eq!(summary.total.amount_cents, 3100);
        assert_eq!(summary.total_items, 2);
    }

    #[test]
    fn test_project_empty_cart() {
        let totals = CartTotals::empty(Currency::BRL);
        let err = OrderSummary::project(&[], &totals).unwrap_err();
        assert!(matches!(err, CartError::EmptyCart));
    }
}
