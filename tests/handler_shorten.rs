mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::shorten_handler;

use common::{MockConnectInfoLayer, TEST_DOMAIN};

fn test_server(state: shorturl::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/v1", post(shorten_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com/some/path" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://example.com/some/path");

    let short_url = body["custom_short"].as_str().unwrap();
    let alias = short_url
        .strip_prefix(&format!("{}/", TEST_DOMAIN))
        .expect("short URL should be prefixed with the configured domain");
    assert_eq!(alias.len(), 6);

    // The alias resolves back to the submitted URL through the store.
    let stored = common::stored_mapping(&store, alias).await;
    assert_eq!(stored, Some("https://example.com/some/path".to_string()));
}

#[tokio::test]
async fn test_shorten_reports_budget_after_call() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let body = response.json::<serde_json::Value>();
    // Quota is 10; the response reports the budget after this call.
    assert_eq!(body["rate_limit"], 9);
    // Fresh window: 1800s reported in whole minutes.
    assert_eq!(body["rate_limit_reset"], 30);
}

#[tokio::test]
async fn test_shorten_rate_limit_decreases_across_calls() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let mut previous = i64::MAX;
    for i in 0..3 {
        let response = server
            .post("/api/v1")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;

        assert_eq!(response.status_code(), 201);

        let remaining = response.json::<serde_json::Value>()["rate_limit"]
            .as_i64()
            .unwrap();
        assert!(remaining < previous);
        previous = remaining;
    }
}

#[tokio::test]
async fn test_shorten_custom_alias_stored_verbatim() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({
            "url": "https://example.com",
            "custom_short": "my-link"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["custom_short"], format!("{}/my-link", TEST_DOMAIN));

    let stored = common::stored_mapping(&store, "my-link").await;
    assert_eq!(stored, Some("https://example.com".to_string()));
}

#[tokio::test]
async fn test_shorten_duplicate_custom_alias_rejected() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let first = server
        .post("/api/v1")
        .json(&json!({ "url": "https://first.com", "custom_short": "taken" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/api/v1")
        .json(&json!({ "url": "https://second.com", "custom_short": "taken" }))
        .await;
    assert_eq!(second.status_code(), 403);

    let body = second.json::<serde_json::Value>();
    assert_eq!(body["error"], "Custom short URL already exists");
}

#[tokio::test]
async fn test_shorten_quota_exhaustion_yields_429() {
    let (state, _store) = common::create_test_state_with_quota(2);
    let server = test_server(state);

    for i in 0..2 {
        let response = server
            .post("/api/v1")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
        assert_eq!(response.status_code(), 201);
    }

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com/over" }))
        .await;

    assert_eq!(response.status_code(), 429);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Rate limit exceeded");

    let reset = body["rate_limit_reset"].as_u64().unwrap();
    assert!(reset > 0);
    assert!(reset <= common::TEST_WINDOW.as_secs() / 60);
}

#[tokio::test]
async fn test_shorten_rejected_request_does_not_consume_budget() {
    let (state, _store) = common::create_test_state_with_quota(3);
    let server = test_server(state);

    // A failing request after the budget exists must not decrement it.
    server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    server
        .post("/api/v1")
        .json(&json!({ "url": "ftp://example.com" }))
        .await
        .assert_status_bad_request();

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com/second" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["rate_limit"], 1);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Bad request");
}

#[tokio::test]
async fn test_shorten_ftp_url_rejected() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "ftp://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Bad request");
}

#[tokio::test]
async fn test_shorten_own_domain_rejected() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": format!("https://{}/abc123", TEST_DOMAIN) }))
        .await;

    assert_eq!(response.status_code(), 503);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "You cant hack the system :)");
}

#[tokio::test]
async fn test_shorten_schemeless_url_normalized() {
    let (state, store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "example.com/page", "custom_short": "plain" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://example.com/page");

    let stored = common::stored_mapping(&store, "plain").await;
    assert_eq!(stored, Some("https://example.com/page".to_string()));
}

#[tokio::test]
async fn test_shorten_echoes_explicit_expiry() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "expiry": 5 }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["expiry"], 5);
}

#[tokio::test]
async fn test_shorten_oversized_expiry_rejected() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com", "expiry": u64::MAX }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Bad request");
}

#[tokio::test]
async fn test_shorten_defaults_expiry_when_absent() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/v1")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let body = response.json::<serde_json::Value>();
    // Test state is configured with a 24h default.
    assert_eq!(body["expiry"], 24);
}
