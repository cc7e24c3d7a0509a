mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use redis_shortener::api::handlers::shorten_handler;
use redis_shortener::domain::repositories::UrlRepository;
use serde_json::json;

fn shorten_app(state: redis_shortener::AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_url"].as_str().unwrap();
    assert!(common::is_url_safe_code(code));

    let stored = repo.find_by_short_code(code).await.unwrap();
    assert_eq!(stored.original_url, "https://example.com");
}

#[tokio::test]
async fn test_shorten_response_has_only_short_url() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a/b?c=d" }))
        .await;

    let json = response.json::<serde_json::Value>();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("short_url"));
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_codes() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    for _ in 0..2 {
        server
            .post("/shorten")
            .json(&json!({ "url": "https://dup.example.com" }))
            .await
            .assert_status_ok();
    }

    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "invalid URL");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server.post("/shorten").text("{not json").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_storage_failure() {
    let state = common::create_failing_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("connection refused"));
}
