//! Outcome of fetching the catalog feed.
//!
//! The fetch itself happens outside this crate. It reports back either the
//! raw text or a [`FeedError`].

use serde::Serialize;
use thiserror::Error;

/// The feed text could not be obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed unavailable: {0}")]
    Unavailable(String),
}

/// State of the catalog as far as rendering is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FeedStatus {
    /// Waiting for a fetch to report back.
    #[default]
    Pending,
    /// The fetch succeeded and produced `count` records.
    Loaded { count: usize },
    /// The fetch failed. Records from an earlier load, if any, are kept.
    Unavailable { reason: String },
}

impl FeedStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FeedStatus::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FeedStatus::Loaded { .. })
    }
}
