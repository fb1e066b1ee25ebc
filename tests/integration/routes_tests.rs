//! Route table integration tests.
//!
//! Tests verify:
//! - Unmatched paths render the 404 page
//! - Unsupported methods on known paths also render the 404 page
//! - Health check returns JSON

use axum::http::{header, Method, StatusCode};

use super::test_utils::{body_string, get, request, send, set_cookie, test_router};

// =============================================================================
// Not Found
// =============================================================================

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/nonexistent-path")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(set_cookie(&response).is_none());
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn test_nested_unknown_path_is_404() {
    let (router, _registry) = test_router();

    for uri in ["/login/extra", "/time/", "/static/app.css", "/index.htm"] {
        let response = send(&router, get(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_unsupported_method_is_404() {
    let (router, registry) = test_router();

    let cases = [
        (Method::POST, "/"),
        (Method::DELETE, "/index.html"),
        (Method::PUT, "/login"),
        (Method::POST, "/time"),
    ];

    for (method, uri) in cases {
        let response = send(&router, request(method.clone(), uri)).await;
        assert_eq!(
            response.status(),
            StatusCode::NOT_FOUND,
            "{} {}",
            method,
            uri
        );
    }

    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_not_found_page_is_html() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/missing")).await;

    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
