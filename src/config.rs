//! Storefront configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_cart::checkout::DEFAULT_SHARE_BASE_URL;
use vitrine_cart::{MessageTemplate, DEFAULT_STORAGE_KEY};
use vitrine_catalog::{CatalogFieldMap, Currency};
use vitrine_observability::LoggingConfig;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Catalog feed settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Cart persistence settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Checkout handoff settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where the catalog feed lives and how its columns map to records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Published CSV URL. Fetching it is the caller's job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Header names and placeholders.
    #[serde(default)]
    pub fields: CatalogFieldMap,
}

impl FeedConfig {
    /// The feed URL with a `_=<millis>` parameter appended, so that
    /// intermediate caches never serve a stale feed.
    pub fn cache_busted_url(&self, now_millis: i64) -> Option<String> {
        let url = self.url.as_deref()?;
        let separator = if url.contains('?') { '&' } else { '?' };
        Some(format!("{}{}_={}", url, separator, now_millis))
    }

    /// [`cache_busted_url`](Self::cache_busted_url) stamped with the current time.
    pub fn cache_busted_url_now(&self) -> Option<String> {
        self.cache_busted_url(chrono::Utc::now().timestamp_millis())
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency of feed prices and cart totals.
    #[serde(default)]
    pub currency: Currency,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
        }
    }
}

/// Checkout handoff settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Destination phone number, digits only.
    #[serde(default)]
    pub phone: String,

    /// Base URL of the messaging service.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Wording of the order message.
    #[serde(default)]
    pub message: MessageTemplate,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            phone: String::new(),
            share_base_url: default_share_base_url(),
            message: MessageTemplate::default(),
        }
    }
}
