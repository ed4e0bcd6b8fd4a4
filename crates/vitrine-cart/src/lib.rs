//! Persisted shopping cart and checkout projection for vitrine.
//!
//! - **Cart**: [`CartStore`] keeps one [`CartEntry`] per record id, bumps
//!   quantities on repeat adds, and overwrites its stored state after every
//!   mutation
//! - **Totals**: [`CartTotals`], computed on demand, exact to the cent
//! - **Events**: listeners registered with [`CartStore::subscribe`]
//! - **Checkout**: [`OrderSummary`], [`MessageTemplate`] and [`share_link`]
//!
//! # Example
//!
//! ```
//! use vitrine_cache::MemoryStore;
//! use vitrine_cart::CartStore;
//! use vitrine_catalog::{Currency, Money, ProductId, Record};
//!
//! let bolo = Record::new(ProductId::new(1).unwrap(), "Bolo", "", Money::new(1550, Currency::BRL), "");
//!
//! let mut cart = CartStore::new(MemoryStore::new());
//! cart.hydrate();
//! cart.add(&bolo).unwrap();
//! cart.add(&bolo).unwrap();
//!
//! assert_eq!(cart.totals().total_items, 2);
//! assert_eq!(cart.totals().total_price.display(), "R$ 31.00");
//! ```

pub mod checkout;
mod entry;
mod error;
mod events;
mod store;
mod totals;

pub use checkout::{share_link, MessageTemplate, OrderLine, OrderSummary};
pub use entry::CartEntry;
pub use error::CartError;
pub use events::{CartEvent, CartListener, ListenerId};
pub use store::{CartStore, DEFAULT_STORAGE_KEY};
pub use totals::CartTotals;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::checkout::{share_link, MessageTemplate, OrderLine, OrderSummary};
    pub use crate::{
        CartEntry, CartError, CartEvent, CartListener, CartStore, CartTotals, ListenerId,
    };
}
