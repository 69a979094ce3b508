//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Respect RUST_LOG, falling back to the configured default level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Idempotent init so tests can call it freely

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the logging subsystem.
///
/// RUST_LOG takes precedence; otherwise the configured level applies to
/// this crate. Safe to call more than once; later calls are no-ops.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!("fitnav={}", config.log_level);

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
