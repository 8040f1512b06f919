//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Respect RUST_LOG when set, falling back to the configured filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging throughout dispatch and
//!   resolution; log points carry fields, not formatted strings
//! - Initialization is idempotent so embedding applications and tests can
//!   both call it

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. `default_filter` applies when
/// RUST_LOG is not set. Safe to call more than once; later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
