//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{TestApp, UserBuilder};

/// Test creating a user returns 201 and the stored representation
#[tokio::test]
async fn test_create_user_returns_created() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            &json!({ "name": "  John Doe  ", "email": "john@example.com" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["name"], "John Doe");
    assert_eq!(data["email"], "john@example.com");

    let id = data["id"].as_str().unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(app.repository.len(), 1);
    assert_eq!(app.repository.all()[0].id().to_string(), id);
}

/// Test each create generates a distinct id
#[tokio::test]
async fn test_create_twice_stores_two_users() {
    let app = TestApp::new();
    let payload = UserBuilder::new().build();

    let first = app.post_json("/api/users", &payload).await;
    let second = app.post_json("/api/users", &payload).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_ne!(first.body["data"]["id"], second.body["data"]["id"]);
    assert_eq!(app.repository.len(), 2);
}

/// Test missing fields are reported per field
#[tokio::test]
async fn test_create_with_missing_fields_fails() {
    let app = TestApp::new();

    let response = app.post_json("/api/users", &json!({})).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["code"], 10007);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "name"]);
    assert!(app.repository.is_empty());
}

/// Test an invalid email is rejected
#[tokio::test]
async fn test_create_with_invalid_email_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            &UserBuilder::new().with_email("not-an-email").build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["message"], "email: Invalid email format");
    assert!(app.repository.is_empty());
}

/// Test a whitespace-only name is rejected once trimmed
#[tokio::test]
async fn test_create_with_blank_name_fails() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            &UserBuilder::new().with_name("   ").build(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "name");
    assert_eq!(
        response.body["errors"][0]["message"],
        "Name must be 1-255 characters"
    );
    assert!(app.repository.is_empty());
}

/// Test the name limit counts characters, not bytes
#[tokio::test]
async fn test_create_name_length_limit() {
    let app = TestApp::new();

    let at_limit = app
        .post_json(
            "/api/users",
            &UserBuilder::new().with_name("é".repeat(255)).build(),
        )
        .await;
    assert_eq!(at_limit.status, StatusCode::CREATED);

    let over_limit = app
        .post_json(
            "/api/users",
            &UserBuilder::new().with_name("a".repeat(256)).build(),
        )
        .await;
    assert_eq!(over_limit.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.repository.len(), 1);
}

/// Test the limit applies to the trimmed name and email
#[tokio::test]
async fn test_create_padded_name_at_limit_succeeds() {
    let app = TestApp::new();
    let name = format!("  {}  ", "a".repeat(255));

    let response = app
        .post_json(
            "/api/users",
            &json!({ "name": name, "email": "  john@example.com  " }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "a".repeat(255));
    assert_eq!(response.body["data"]["email"], "john@example.com");
    assert_eq!(app.repository.len(), 1);
}

/// Test malformed JSON is a bad request
#[tokio::test]
async fn test_create_with_malformed_json_fails() {
    let app = TestApp::new();

    let response = app.post_raw("/api/users", "{ not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 10002);
}

/// Test fetching a created user
#[tokio::test]
async fn test_get_existing_user() {
    let app = TestApp::new();
    let created = app.post_json("/api/users", &UserBuilder::new().build()).await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app.get(&format!("/api/users/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created.body);
}

/// Test fetching an unknown but well-formed id
#[tokio::test]
async fn test_get_unknown_user_returns_not_found() {
    let app = TestApp::new();
    let id = "550e8400-e29b-41d4-a716-446655440000";

    let response = app.get(&format!("/api/users/{}", id)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], 10001);
    assert_eq!(
        response.body["message"],
        format!("User not found with ID: {}", id)
    );
}

/// Test a malformed id never reaches the repository
#[tokio::test]
async fn test_get_with_malformed_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/users/invalid-uuid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 10002);
    assert_eq!(response.body["message"], "Invalid UUID format: invalid-uuid");
}

/// Test an uppercase id finds the record stored under its lowercase form
#[tokio::test]
async fn test_get_is_case_insensitive_on_id() {
    let app = TestApp::new();
    let created = app.post_json("/api/users", &UserBuilder::new().build()).await;
    let id = created.body["data"]["id"].as_str().unwrap().to_uppercase();

    let response = app.get(&format!("/api/users/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], created.body["data"]["id"]);
}
