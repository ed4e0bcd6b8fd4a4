//! Type-safe key-value persistence layer for vitrine.
//!
//! Provides a small [`KvStore`] trait, two stores, and a [`Cache`] wrapper
//! that handles JSON serialization.
//!
//! # Example
//!
//! ```
//! use vitrine_cache::{Cache, MemoryStore};
//!
//! let mut cache = Cache::new(MemoryStore::new());
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//!
//! let cart: Option<Vec<u32>> = cache.get("cart").unwrap();
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//!
//! cache.delete("cart").unwrap();
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
