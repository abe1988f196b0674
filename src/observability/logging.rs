//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Human-readable fmt output on stdout
//! - `RUST_LOG` overrides the default filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "mock_api_server=info,tower_http=debug";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
