//! Configurable mock HTTP API server.
//!
//! Serves canned responses for a handful of routes, optionally after an
//! artificial delay, so client code can be exercised against a predictable
//! remote API.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.json ──▶ config::load_config ──▶ MockConfig
//!                                              │
//!                                              ▼
//!   Client ──▶ TcpListener ──▶ http::MockServer (request id, trace)
//!                                              │
//!                                              ▼
//!                               routing::table (method + path)
//!                                              │
//!                                              ▼
//!   Client ◀── response ◀── Throttle ◀── http::handlers
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::MockConfig;
pub use http::MockServer;
