//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use mock_api_server::{MockConfig, MockServer};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A mock server running on an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish cleanly.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle
            .await
            .expect("server task panicked")
            .expect("server returned an error");
    }
}

/// Start a mock server with the given throttle.
///
/// The listener is bound before this returns, so requests can be sent right away.
pub async fn spawn_server(throttle_ms: u64) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown, stop) = oneshot::channel();
    let server = MockServer::new(MockConfig::new(addr.port(), throttle_ms));
    let handle = tokio::spawn(server.run(listener, async move {
        let _ = stop.await;
    }));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// HTTP client that ignores system proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
