//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID, open span)
//!     → routing::table (method + path → handler)
//!     → handlers.rs (build canned response)
//!     → throttle.rs (hold response for the configured delay)
//!     → Send to client
//! ```

pub mod fixtures;
pub mod handlers;
pub mod request;
pub mod server;
pub mod throttle;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, MockServer};
pub use throttle::Throttle;
