//! Change notification for cart observers.

use vitrine_catalog::ProductId;

use crate::totals::CartTotals;

/// What changed in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A record was added; `quantity` is the entry's quantity afterwards.
    Added { id: ProductId, quantity: u32 },
    /// An entry was removed.
    Removed { id: ProductId },
    /// The cart was reloaded from storage with `entries` entries.
    Hydrated { entries: usize },
}

/// Receives cart changes, e.g. to re-render a cart badge or show a toast.
pub trait CartListener {
    fn on_cart_change(&mut self, event: &CartEvent, totals: &CartTotals);
}

impl<F> CartListener for F
where
    F: FnMut(&CartEvent, &CartTotals),
{
    fn on_cart_change(&mut self, event: &CartEvent, totals: &CartTotals) {
        self(event, totals)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
