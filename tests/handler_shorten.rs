mod common;

use axum::{Router, body::Bytes, routing::post};
use axum_test::TestServer;
use serde_json::json;
use snaplink::api::handlers::shorten_handler;
use snaplink::domain::repositories::MappingRepository;
use snaplink::infrastructure::persistence::SqliteMappingRepository;
use std::sync::Arc;

async fn test_server() -> (TestServer, Arc<SqliteMappingRepository>) {
    let (state, repo) = common::create_test_state().await;
    let app = Router::new()
        .route("/api", post(shorten_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_shorten_json_success() {
    let (server, repo) = test_server().await;

    let response = server
        .post("/api")
        .json(&json!({ "original_url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(
        json["short_url"],
        format!("{}/c/{}", common::TEST_BASE_URL, code)
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_form_success() {
    let (server, _repo) = test_server().await;

    let response = server
        .post("/api")
        .form(&[("original_url", "https://example.com/a?x=1&y=2")])
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert!(code.chars().all(|c| c.is_ascii_alphabetic()));
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let (server, repo) = test_server().await;

    let first = server
        .post("/api")
        .json(&json!({ "original_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api")
        .form(&[("original_url", "https://example.com/a")])
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(first["short_url"], second["short_url"]);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_empty_url_is_bad_request() {
    let (server, repo) = test_server().await;

    let response = server
        .post("/api")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_missing_field_is_bad_request() {
    let (server, _repo) = test_server().await;

    let response = server.post("/api").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_oversized_url_is_bad_request() {
    let (server, repo) = test_server().await;
    let long_url = format!("https://example.com/{}", "a".repeat(9000));

    let response = server
        .post("/api")
        .json(&json!({ "original_url": long_url }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_malformed_json_is_bad_request() {
    let (server, _repo) = test_server().await;

    let response = server
        .post("/api")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}
