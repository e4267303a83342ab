//! CORS Middleware Configuration

use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Create CORS layer from settings
///
/// An empty (or entirely unparsable) origin list allows any origin.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer
            .allow_origin(origins)
            .max_age(Duration::from_secs(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    /// Send a preflight for `POST /api/users` and return the allowed origin.
    async fn preflight(settings: CorsSettings, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/api/users", post(|| async {}))
            .layer(create_cors_layer(&settings));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/users")
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    fn origins(list: &[&str]) -> CorsSettings {
        CorsSettings {
            allowed_origins: list.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let allowed = preflight(origins(&["http://localhost:3000"]), "http://localhost:3000").await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));
    }

    #[tokio::test]
    async fn test_unlisted_origin_is_not_allowed() {
        let allowed = preflight(origins(&["http://localhost:3000"]), "http://evil.example").await;
        assert_eq!(allowed, None);
    }

    #[tokio::test]
    async fn test_empty_list_allows_any_origin() {
        let allowed = preflight(origins(&[]), "http://anywhere.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }
}
