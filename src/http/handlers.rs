//! Handlers for the mock routes.
//!
//! Each handler logs what it is serving, builds its canned response and then
//! hands it to the throttle, so the response is written no earlier than the
//! configured delay after the request arrived.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::http::fixtures::sample_user;
use crate::http::server::AppState;
use crate::routing::table::{ALWAYS_401_PATH, ALWAYS_404_PATH, USER_PATH};

/// Failures inside a handler. Surfaced to the client as a bare 500.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Handler failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// `POST /api/user`: echo the JSON body back.
///
/// Bodies that are not JSON (or not sent as `application/json`) are answered
/// with the extractor's own rejection, without waiting out the throttle.
pub async fn echo_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, JsonRejection> {
    let Json(body) = body.inspect_err(|rejection| {
        tracing::debug!(
            method = "POST",
            path = USER_PATH,
            status = %rejection.status(),
            content_type = ?headers.get(header::CONTENT_TYPE),
            reason = %rejection.body_text(),
            "Rejected request body"
        );
    })?;

    tracing::info!(
        method = "POST",
        path = USER_PATH,
        headers = %headers_to_json(&headers),
        "Echoing request body"
    );
    Ok(state.throttle.deliver(Json(body)).await)
}

/// `GET /api/user`: the fixture user with explicit content headers.
pub async fn get_user(State(state): State<AppState>) -> Result<Response, HandlerError> {
    tracing::info!(method = "GET", path = USER_PATH, "Serving sample user");

    let body = serde_json::to_vec(&sample_user())?;
    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
        ],
        body,
    )
        .into_response();

    Ok(state.throttle.deliver(response).await)
}

/// `GET /api/always/404`
pub async fn always_not_found(State(state): State<AppState>) -> StatusCode {
    tracing::info!(method = "GET", path = ALWAYS_404_PATH, "Serving canned 404");
    state.throttle.deliver(StatusCode::NOT_FOUND).await
}

/// `GET /api/always/401`
pub async fn always_unauthorized(State(state): State<AppState>) -> StatusCode {
    tracing::info!(method = "GET", path = ALWAYS_401_PATH, "Serving canned 401");
    state.throttle.deliver(StatusCode::UNAUTHORIZED).await
}

/// Anything outside the route table, including known paths with another method.
pub async fn unmatched(method: Method, uri: Uri) -> StatusCode {
    tracing::debug!(method = %method, path = %uri.path(), "No route matched");
    StatusCode::NOT_FOUND
}

/// Render request headers as a JSON object for logging.
///
/// Repeated headers are joined with ", ".
pub fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match map.get_mut(name.as_str()) {
            Some(Value::String(existing)) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            _ => {
                map.insert(name.as_str().to_string(), Value::String(value));
            }
        }
    }
    Value::Object(map)
}
