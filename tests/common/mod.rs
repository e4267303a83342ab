//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::Value;
use tower::ServiceExt;

use user_service::config::Settings;
use user_service::infrastructure::repositories::InMemoryUserRepository;
use user_service::startup::{self, AppState};

/// Test application backed by the in-memory repository
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryUserRepository>,
}

/// Status and decoded JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Build the full router (middleware included) over a fresh repository
    pub fn new() -> Self {
        let settings = Settings::from_defaults().expect("default settings");
        let repository = Arc::new(InMemoryUserRepository::new());
        let state = AppState::new(repository.clone(), None, settings);

        Self {
            router: startup::build_router(state),
            repository,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, &body.to_string()).await
    }

    /// Make a POST request with an arbitrary body labelled as JSON
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a GET request and return the raw body text
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Builder for create-user payloads, valid by default
pub struct UserBuilder {
    name: String,
    email: String,
}

impl UserBuilder {
    /// Start from a random name and email
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            email: SafeEmail().fake(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn build(self) -> Value {
        serde_json::json!({ "name": self.name, "email": self.email })
    }
}
