//! Observability subsystem.
//!
//! All output goes through `tracing`; `logging.rs` installs the subscriber.

pub mod logging;
