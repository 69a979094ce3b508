//! Observability subsystem.
//!
//! Failures at this layer are operational-log-only: guard decisions,
//! fail-open events, and view loads go to structured logs. No metrics
//! endpoint and no user-facing error surface.

pub mod logging;
