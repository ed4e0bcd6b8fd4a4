//! Cart error types.

use thiserror::Error;
use vitrine_cache::CacheError;
use vitrine_catalog::Currency;

/// Errors surfaced by cart and checkout operations.
///
/// Adding a record only fails on a currency mismatch; removal never fails.
/// The rest come from explicit persistence calls and from checkout.
#[derive(Error, Debug)]
pub enum CartError {
    /// Checkout requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Record priced in a currency other than the cart's.
    #[error("Currency mismatch: cart is in {expected}, record is in {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    /// Persistence error.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}
