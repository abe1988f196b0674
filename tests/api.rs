//! End-to-end checks of the mock routes over a real socket.

use mock_api_server::http::fixtures::{sample_user, User};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn post_user_echoes_any_json_body() {
    let server = common::spawn_server(0).await;
    let client = common::client();

    let bodies = [
        json!({}),
        json!({ "id": 42, "name": "Bob", "email": "bob@email.com" }),
        json!({ "unicode": "héllo ✓", "escaped": "line\nbreak \"quoted\"" }),
        json!({ "list": [1, 2.5, -3, null, true], "nested": { "deep": { "deeper": [] } } }),
        json!([{ "a": 1 }, { "b": 2 }]),
    ];

    for body in bodies {
        let res = client
            .post(server.url("/api/user"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let echoed: Value = res.json().await.unwrap();
        assert_eq!(echoed, body);
    }

    server.stop().await;
}

#[tokio::test]
async fn post_user_with_broken_json_is_a_client_error() {
    let server = common::spawn_server(0).await;

    let res = common::client()
        .post(server.url("/api/user"))
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"id": 1,"#)
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());

    server.stop().await;
}

#[tokio::test]
async fn get_user_returns_fixture() {
    let server = common::spawn_server(0).await;

    let res = common::client().get(server.url("/api/user")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");

    let declared: usize = res.headers()[CONTENT_LENGTH]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    let body = res.bytes().await.unwrap();
    assert_eq!(declared, body.len());

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user, sample_user());
    assert_eq!(user.id, 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@email.com");

    server.stop().await;
}

#[tokio::test]
async fn canned_error_routes_have_empty_bodies() {
    let server = common::spawn_server(0).await;
    let client = common::client();

    for (path, status) in [
        ("/api/always/404", StatusCode::NOT_FOUND),
        ("/api/always/404?page=2", StatusCode::NOT_FOUND),
        ("/api/always/401", StatusCode::UNAUTHORIZED),
        ("/api/always/401?token=abc", StatusCode::UNAUTHORIZED),
    ] {
        let res = client
            .get(server.url(path))
            .header("authorization", "Bearer whatever")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), status, "{path}");
        assert!(res.bytes().await.unwrap().is_empty(), "{path}");
    }

    server.stop().await;
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = common::spawn_server(0).await;

    let res = common::client().get(server.url("/api/nothing")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}
