//! Logging bootstrap for vitrine.
//!
//! The library crates only emit `tracing` events. An application calls
//! [`init`] once at startup to decide where those events go and how they
//! look:
//! - `LogFormat::Json` - one JSON object per line, for log aggregation
//! - `LogFormat::Human` - compact text, for development

mod logging;

pub use logging::*;
