//! Composition root: one catalog, one cart.

use serde::Serialize;
use tracing::{debug, info, warn};
use vitrine_cache::KvStore;
use vitrine_cart::{share_link, CartError, CartStore, CartTotals, OrderSummary};
use vitrine_catalog::{Catalog, CsvRecordParser, ProductId};

use crate::config::{CheckoutConfig, StoreConfig};
use crate::feed::{FeedError, FeedStatus};

/// What to show in the "added to cart" confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedItem {
    pub id: ProductId,
    pub name: String,
    pub image_ref: String,
    /// Quantity of the entry after the add.
    pub quantity: u32,
}

/// Order message and link handed to the messaging service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutHandoff {
    pub summary: OrderSummary,
    pub message: String,
    pub link: String,
}

/// Owns the session's catalog and cart and routes user events to them.
///
/// All methods run to completion synchronously; the caller serializes events.
#[derive(Debug)]
pub struct Storefront<S> {
    parser: CsvRecordParser,
    catalog: Catalog,
    feed_status: FeedStatus,
    cart: CartStore<S>,
    checkout: CheckoutConfig,
}

impl<S: KvStore> Storefront<S> {
    /// Build a storefront and hydrate its cart from `store`.
    pub fn new(config: &StoreConfig, store: S) -> Self {
        let parser =
            CsvRecordParser::new(config.feed.fields.clone()).with_currency(config.cart.currency);
        let mut cart = CartStore::new(store)
            .with_key(config.cart.storage_key.clone())
            .with_currency(config.cart.currency);
        cart.hydrate();

        Self {
            parser,
            catalog: Catalog::new(),
            feed_status: FeedStatus::Pending,
            cart,
            checkout: config.checkout.clone(),
        }
    }

    /// Take the result of a feed fetch.
    ///
    /// Only the first outcome while [`FeedStatus::Pending`] counts; later
    /// ones are dropped until [`request_reload`](Self::request_reload).
    /// Success replaces the catalog. Failure keeps whatever was loaded
    /// before, so a catalog never goes from loaded to empty. The cart is
    /// left alone either way.
    pub fn ingest_feed(&mut self, outcome: Result<String, FeedError>) -> &FeedStatus {
        if !self.feed_status.is_pending() {
            debug!(status = ?self.feed_status, "feed already settled, outcome dropped");
            return &self.feed_status;
        }

        self.feed_status = match outcome {
            Ok(raw) => {
                self.catalog = Catalog::parse(&raw, &self.parser);
                info!(records = self.catalog.len(), "catalog loaded");
                FeedStatus::Loaded {
                    count: self.catalog.len(),
                }
            }
            Err(error) => {
                warn!(%error, kept = self.catalog.len(), "catalog feed unavailable");
                FeedStatus::Unavailable {
                    reason: error.to_string(),
                }
            }
        };
        &self.feed_status
    }

    /// Accept the next feed outcome again, e.g. before a refetch.
    ///
    /// The current catalog stays in place until that outcome arrives.
    pub fn request_reload(&mut self) {
        debug!(records = self.catalog.len(), "feed reload requested");
        self.feed_status = FeedStatus::Pending;
    }

    /// Add one unit of the catalog record `id` to the cart.
    ///
    /// Returns `None`, changing nothing, when the id is not in the catalog
    /// or the cart refuses the record.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<AddedItem> {
        let record = self.catalog.get(id)?;
        let quantity = match self.cart.add(record) {
            Ok(quantity) => quantity,
            Err(error) => {
                warn!(%id, %error, "record not added to cart");
                return None;
            }
        };
        Some(AddedItem {
            id,
            name: record.name.clone(),
            image_ref: record.image_ref.clone(),
            quantity,
        })
    }

    /// Remove the cart entry for `id`, if any.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Summary of the current cart.
    pub fn order_summary(&self) -> Result<OrderSummary, CartError> {
        OrderSummary::project(self.cart.entries(), &self.cart.totals())
    }

    /// Build the order message and share link. Fails on an empty cart.
    pub fn checkout(&self) -> Result<CheckoutHandoff, CartError> {
        let summary = self.order_summary()?;
        let message = self.checkout.message.render(&summary);
        let link = share_link(&self.checkout.share_base_url, &self.checkout.phone, &message);

        info!(
            lines = summary.lines.len(),
            total = %summary.total,
            "checkout handoff prepared"
        );
        Ok(CheckoutHandoff {
            summary,
            message,
            link,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn feed_status(&self) -> &FeedStatus {
        &self.feed_status
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable access to the cart, e.g. to subscribe listeners.
    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Tear down, returning the cart's store.
    pub fn into_store(self) -> S {
        self.cart.into_store()
    }
}
