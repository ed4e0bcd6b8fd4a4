//! Checkout projection.
//!
//! Turns cart state into a plain-text order message and a share link for an
//! external messaging service. Nothing here mutates the cart.

mod message;
mod summary;

pub use message::{share_link, MessageTemplate, DEFAULT_SHARE_BASE_URL};
pub use summary::{OrderLine, OrderSummary};
