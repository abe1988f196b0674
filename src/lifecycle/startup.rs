//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Bind the listener on the configured address
//! - Hand the listener to the server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener is bound only after the config is fully accepted

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError};
use crate::http::MockServer;
use crate::routing::ROUTES;

/// Errors that prevent the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load the config at `config_path`, bind and serve until `shutdown` resolves.
pub async fn run<F>(config_path: &Path, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let config = load_config(config_path)?;
    let addr = config.socket_addr();

    tracing::info!(
        port = config.port,
        throttle_ms = config.throttle,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    for (method, path) in ROUTES {
        tracing::debug!(method, path, "Route registered");
    }

    MockServer::new(config)
        .run(listener, shutdown)
        .await
        .map_err(StartupError::Serve)
}
