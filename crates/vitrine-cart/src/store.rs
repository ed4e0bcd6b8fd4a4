//! The cart state machine and its persistence.

use std::fmt;

use tracing::{debug, warn};
use vitrine_cache::{Cache, CacheError, KvStore};
use vitrine_catalog::{Currency, ProductId, Record};

use crate::entry::{CartEntry, StoredEntry};
use crate::error::CartError;
use crate::events::{CartEvent, CartListener, ListenerId};
use crate::totals::CartTotals;

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "vitrine-cart";

/// A persisted cart: at most one entry per record id, in first-added order.
///
/// Every mutation is followed by a full overwrite of the stored state. A
/// failed write is logged and otherwise ignored; the in-memory entries stay
/// authoritative until the next successful write or a fresh [`hydrate`].
///
/// [`hydrate`]: CartStore::hydrate
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    currency: Currency,
    entries: Vec<CartEntry>,
    listeners: Vec<(ListenerId, Box<dyn CartListener>)>,
    next_listener: u64,
}

impl<S: KvStore> CartStore<S> {
    /// Create an empty cart persisting into `store`.
    ///
    /// Nothing is read until [`hydrate`](Self::hydrate) is called.
    pub fn new(store: S) -> Self {
        Self {
            cache: Cache::new(store),
            key: DEFAULT_STORAGE_KEY.to_string(),
            currency: Currency::default(),
            entries: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the cart's currency. In-memory entries priced otherwise are dropped.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self.entries.retain(|e| e.unit_price.currency == currency);
        self
    }

    /// Add one unit of `record`.
    ///
    /// An existing entry for the id gets its quantity bumped and keeps its
    /// first snapshot; otherwise a new entry with quantity 1 is appended.
    /// Returns the entry's quantity afterwards.
    ///
    /// Records priced in a currency other than the cart's are refused with
    /// [`CartError::CurrencyMismatch`], leaving the cart untouched.
    pub fn add(&mut self, record: &Record) -> Result<u32, CartError> {
        if record.unit_price.currency != self.currency {
            return Err(CartError::CurrencyMismatch {
                expected: self.currency,
                got: record.unit_price.currency,
            });
        }

        let quantity = match self.entries.iter_mut().find(|e| e.id == record.id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry::from_record(record));
                1
            }
        };

        debug!(id = %record.id, quantity, "added to cart");
        self.persist_after_mutation();
        self.notify(CartEvent::Added {
            id: record.id,
            quantity,
        });
        Ok(quantity)
    }

    /// Remove the entry for `id`. Returns whether one was present.
    ///
    /// Removing an absent id leaves the entries untouched and notifies no one.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() < len_before;

        debug!(%id, removed, "removed from cart");
        self.persist_after_mutation();
        if removed {
            self.notify(CartEvent::Removed { id });
        }
        removed
    }

    /// Current totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_entries(&self.entries, self.currency)
    }

    /// Replace the entries with whatever is stored.
    ///
    /// A missing key or an undecodable value yields an empty cart. Stored
    /// entries that break invariants are dropped and duplicate ids merged.
    pub fn hydrate(&mut self) {
        self.entries = match self.cache.get::<Vec<StoredEntry>>(&self.key) {
            Ok(Some(stored)) => self.normalize(stored),
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(key = %self.key, %error, "stored cart is unreadable, starting empty");
                Vec::new()
            }
        };

        debug!(key = %self.key, entries = self.entries.len(), "hydrated cart");
        self.notify(CartEvent::Hydrated {
            entries: self.entries.len(),
        });
    }

    /// Write the entries to the store, replacing what was there.
    pub fn persist(&mut self) -> Result<(), CacheError> {
        let stored: Vec<StoredEntry> = self.entries.iter().map(StoredEntry::from_entry).collect();
        self.cache.set(&self.key, &stored)
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The entry for `id`, if any.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Register a listener for subsequent changes.
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: CartListener + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() < len_before
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Give back the underlying store, dropping in-memory state.
    pub fn into_store(self) -> S {
        self.cache.into_store()
    }

    fn persist_after_mutation(&mut self) {
        if let Err(error) = self.persist() {
            warn!(key = %self.key, %error, "failed to persist cart");
        }
    }

    fn notify(&mut self, event: CartEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let totals = self.totals();
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_cart_change(&event, &totals);
        }
    }

    fn normalize(&self, stored: Vec<StoredEntry>) -> Vec<CartEntry> {
        let total = stored.len();
        let mut entries: Vec<CartEntry> = Vec::with_capacity(total);

        for entry in stored.into_iter().filter_map(|s| s.into_entry(self.currency)) {
            match entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity)
                }
                None => entries.push(entry),
            }
        }

        if entries.len() < total {
            debug!(
                stored = total,
                kept = entries.len(),
                "dropped or merged stored cart entries"
            );
        }
        entries
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cache", &self.cache)
            .field("key", &self.key)
            .field("currency", &self.currency)
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
