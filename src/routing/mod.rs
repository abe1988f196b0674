//! Request routing.
//!
//! # Design Decisions
//! - Four fixed routes, registered once at startup
//! - Immutable after construction (thread-safe without locks)
//! - Unmatched requests fall through to a plain 404

pub mod table;

pub use table::{route_table, ROUTES};
