//! The fixed route table.

use axum::{routing::get, Router};

use crate::http::handlers::{always_not_found, always_unauthorized, echo_user, get_user, unmatched};
use crate::http::server::AppState;

pub const USER_PATH: &str = "/api/user";
pub const ALWAYS_404_PATH: &str = "/api/always/404";
pub const ALWAYS_401_PATH: &str = "/api/always/401";

/// Every (method, path) pair the server answers, in registration order.
pub const ROUTES: [(&str, &str); 4] = [
    ("POST", USER_PATH),
    ("GET", USER_PATH),
    ("GET", ALWAYS_404_PATH),
    ("GET", ALWAYS_401_PATH),
];

/// Bind the mock handlers.
///
/// A known path hit with an unsupported method answers like an unknown path
/// (404, empty body) rather than 405.
pub fn route_table(state: AppState) -> Router {
    Router::new()
        .route(
            USER_PATH,
            get(get_user).post(echo_user).fallback(unmatched),
        )
        .route(ALWAYS_404_PATH, get(always_not_found).fallback(unmatched))
        .route(ALWAYS_401_PATH, get(always_unauthorized).fallback(unmatched))
        .fallback(unmatched)
        .with_state(state)
}
