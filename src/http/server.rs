//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router from the route table
//! - Wire up middleware (request ID, tracing)
//! - Serve connections on a bound listener until shutdown

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::MockConfig;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::throttle::Throttle;
use crate::routing::route_table;

/// Application state injected into handlers.
///
/// Read-only for the lifetime of the server.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub throttle: Throttle,
}

/// The mock API server.
pub struct MockServer {
    router: Router,
    config: MockConfig,
}

impl MockServer {
    /// Create a new server with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        let state = AppState {
            throttle: config.throttle(),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        route_table(state).layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(propagate_request_id_layer()),
        )
    }

    /// The fully layered router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` resolves and in-flight requests have completed.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            port = addr.port(),
            throttle_ms = self.config.throttle,
            "Listening on {}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
