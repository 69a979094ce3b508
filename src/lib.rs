//! Navigation core for a fitness-tracking single-page application.
//!
//! # Architecture Overview
//!
//! ```text
//! Navigation request (to, from)
//!     → guard (async auth check → proceed / redirect / fail-open)
//!     → routing (match path against the static route tree)
//!     → views (lazy, memoized view-module load)
//!     → resolved view chain + merged props, or a redirect target
//! ```
//!
//! The route tree is built once at startup and is immutable thereafter.
//! The auth check is the only suspension point per navigation; overlapping
//! navigations are independent guard invocations.

// Core subsystems
pub mod guard;
pub mod navigator;
pub mod routing;
pub mod views;

// External data contracts
pub mod notifications;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::NavConfig;
pub use guard::{Guard, GuardDecision, NavigationTarget, RedirectTarget};
pub use navigator::Navigator;
pub use routing::{routes, RouteTable};
pub use views::loader::ViewLoader;
