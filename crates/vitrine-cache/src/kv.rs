//! Typed wrapper over a [`KvStore`] with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::store::KvStore;
use crate::CacheError;

/// Type-safe cache over any [`KvStore`].
///
/// Values are stored as JSON, so anything implementing `Serialize` and
/// `DeserializeOwned` can go in.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::Serialize`] if it exists but doesn't decode as `T`.
    ///
    /// ```
    /// use vitrine_cache::{Cache, MemoryStore};
    ///
    /// let mut cache = Cache::new(MemoryStore::new());
    /// cache.set("answer", &42u32).unwrap();
    /// assert_eq!(cache.get::<u32>("answer").unwrap(), Some(42));
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing what was there.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: u64,
        quantity: u32,
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Vec<Line>>("cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut cache = Cache::new(MemoryStore::new());
        let lines = vec![Line { id: 1, quantity: 2 }];
        cache.set("cart", &lines).unwrap();

        assert_eq!(cache.get::<Vec<Line>>("cart").unwrap(), Some(lines));
        assert!(cache.exists("cart").unwrap());
    }

    #[test]
    fn test_undecodable_value_is_an_error() {
        let mut store = MemoryStore::new();
        store.set("cart", b"{not json").unwrap();
        let cache = Cache::new(store);

        let err = cache.get::<Vec<Line>>("cart").unwrap_err();
        assert!(matches!(err, CacheError::Serialize(_)));
    }

    #[test]
    fn test_delete() {
        let mut cache = Cache::new(MemoryStore::new());
        cache.set("k", "v").unwrap();
        cache.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
    }
}
