//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config.json (working directory)
//!     → loader.rs (read, log raw contents, deserialize)
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//!     → handed once to MockServer::new
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once, before any listener is bound
//! - `port` and `throttle` are required; `host` has a default
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, DEFAULT_CONFIG_FILE};
pub use schema::MockConfig;
