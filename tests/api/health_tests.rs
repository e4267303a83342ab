//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{TestApp, UserBuilder};

/// Test basic health check endpoint
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
}

/// Test readiness with the in-memory backend
#[tokio::test]
async fn test_readiness_probe_with_memory_backend() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["checks"]["repository"]["backend"], "memory");
}

/// Test the metrics endpoint exposes request and operation counters
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();
    app.post_json("/api/users", &UserBuilder::new().build()).await;
    app.get("/api/users/invalid-uuid").await;

    let (status, body) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("user_service_http_requests_total"));
    assert!(body.contains("path=\"/api/users/{id}\""));
    assert!(body.contains("operation=\"create_user\""));
    assert!(body.contains("outcome=\"invalid_format\""));
}
