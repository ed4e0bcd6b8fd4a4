//! Catalog feed ingestion and persisted cart for a small storefront.
//!
//! The workspace splits into:
//! - `vitrine-catalog` - records and the lenient CSV feed parser
//! - `vitrine-cache` - key-value persistence
//! - `vitrine-cart` - the cart state machine and checkout projection
//! - `vitrine-observability` - logging bootstrap
//!
//! This crate ties them together: [`StoreConfig`] describes a deployment,
//! and [`Storefront`] owns the catalog and cart built from it.
//!
//! # Example
//!
//! ```
//! use vitrine::{StoreConfig, Storefront};
//! use vitrine::cache::MemoryStore;
//! use vitrine::catalog::ProductId;
//!
//! let mut shop = Storefront::new(&StoreConfig::default(), MemoryStore::new());
//! shop.ingest_feed(Ok("id,nome,preco\n1,Bolo,15.50\n".to_string()));
//!
//! shop.add_to_cart(ProductId::new(1).unwrap());
//! let handoff = shop.checkout().unwrap();
//! assert!(handoff.message.contains("*TOTAL: R$ 15.50*"));
//! ```

pub mod config;
pub mod feed;
pub mod storefront;

pub use config::{CartConfig, CheckoutConfig, FeedConfig, StoreConfig};
pub use feed::{FeedError, FeedStatus};
pub use storefront::{AddedItem, CheckoutHandoff, Storefront};

pub use vitrine_cache as cache;
pub use vitrine_cart as cart;
pub use vitrine_catalog as catalog;
pub use vitrine_observability as observability;
