//! Integration tests for the API layer.
//!
//! These tests spin up a real HTTP server on a random port and exercise
//! the endpoints over the wire.

use std::sync::Arc;
use tandem_api::{create_router, AppState};
use tandem_coordinator::CoordinatorConfig;

/// Spin up a test server on a random port and return the base URL.
async fn start_test_server(config: CoordinatorConfig) -> String {
    let state = Arc::new(AppState::new(config));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Helper to GET a URL and return (status, body_string).
async fn get(base: &str, path: &str) -> (u16, String) {
    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{}{}", base, path))
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, body)
}

/// Helper to POST JSON and return (status, body_string).
async fn post_json(base: &str, path: &str, json: &str) -> (u16, String) {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}{}", base, path))
        .header("content-type", "application/json")
        .body(json.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, body)
}

// ============================================================================
// Health endpoint
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let base = start_test_server(CoordinatorConfig::default()).await;
    let (status, body) = get(&base, "/health").await;
    assert_eq!(status, 200);
    assert!(body.contains("healthy"));
}

// ============================================================================
// Queries endpoint - multi mode
// ============================================================================

#[tokio::test]
async fn test_query_multi_mode() {
    let base = start_test_server(CoordinatorConfig::default()).await;
    let (status, body) = post_json(
        &base,
        "/api/v1/queries",
        r#"{"content": "Calculate 15 * 25 and write a technical summary"}"#,
    )
    .await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["mode"], "multi");
    assert_eq!(json["plan"], serde_json::json!(["analysis", "writing"]));
    assert!(json["steps"][0]["output"].as_str().unwrap().contains("375"));
    assert!(json["output"].as_str().unwrap().contains("Analysis Results:"));
    assert!(json["output"].as_str().unwrap().contains("Generated Content:"));
}

#[tokio::test]
async fn test_query_multi_mode_default_plan() {
    let base = start_test_server(CoordinatorConfig::default()).await;
    let (status, body) =
        post_json(&base, "/api/v1/queries", r#"{"content": "good morning"}"#).await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["plan"], serde_json::json!(["research", "writing"]));
}

// ============================================================================
// Queries endpoint - simple mode
// ============================================================================

#[tokio::test]
async fn test_query_simple_mode() {
    let base = start_test_server(CoordinatorConfig::default()).await;
    let (status, body) = post_json(
        &base,
        "/api/v1/queries",
        r#"{"content": "what is 6 * 7", "mode": "simple"}"#,
    )
    .await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["mode"], "simple");
    assert!(json["output"].as_str().unwrap().contains("42"));
    assert!(json["steps"].as_array().unwrap().is_empty());
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_query_too_long_rejected() {
    let config = CoordinatorConfig {
        max_query_len: 16,
        ..Default::default()
    };
    let base = start_test_server(config).await;

    let (status, body) = post_json(
        &base,
        "/api/v1/queries",
        r#"{"content": "this query is definitely longer than sixteen bytes"}"#,
    )
    .await;

    assert_eq!(status, 400);
    assert!(body.contains("QUERY_TOO_LONG"));
}
