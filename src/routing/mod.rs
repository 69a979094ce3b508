//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path ("/workouts/12/edit")
//!     → matcher.rs (segment matching against the tree)
//!     → default-child descent to a leaf
//!     → Return: matched chain + params + merged props
//!
//! Table Construction (at startup):
//!     table.rs declares the full tree
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tree built once, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - Static segments beat parameters, catch-all is last resort
//! - Matching is total: the catch-all guarantees every path resolves

pub mod matcher;
pub mod node;
pub mod table;
pub mod tabs;

pub use matcher::{RouteMatch, RouteTable};
pub use node::{PropValue, Props, RouteNode};
pub use table::routes;
pub use tabs::tab_from_path;
