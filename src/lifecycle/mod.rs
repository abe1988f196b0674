//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Bind listener → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → future resolves → graceful shutdown
//!     → stop accepting → finish in-flight requests → exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last
//! - A config failure stops startup before any socket is bound
//! - Shutdown is any `Future<Output = ()>`, handed straight to axum

pub mod signals;
pub mod startup;
