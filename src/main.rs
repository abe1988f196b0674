//! Mock API server binary.
//!
//! Reads `config.json` from the working directory, then serves the mock
//! routes until SIGINT/SIGTERM. A bad or missing config exits non-zero
//! without opening a socket.

use std::path::Path;
use std::process::ExitCode;

use mock_api_server::config::DEFAULT_CONFIG_FILE;
use mock_api_server::lifecycle::{signals, startup};
use mock_api_server::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    tracing::info!("mock-api-server v{} starting", env!("CARGO_PKG_VERSION"));

    match startup::run(Path::new(DEFAULT_CONFIG_FILE), signals::wait_for_termination()).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed to start");
            ExitCode::FAILURE
        }
    }
}
