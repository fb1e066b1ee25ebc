//! Session lifecycle integration tests.
//!
//! Tests verify:
//! - Anonymous visitors are redirected from the index page
//! - A cookie issued at login personalizes later requests
//! - Unknown identifiers are treated as anonymous
//! - Logout expires the cookie, is idempotent and keeps the identity
//! - Identities registered concurrently are all visible afterwards

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};

use super::test_utils::{
    body_string, get, get_with_cookie, login, request, send, set_cookie, test_router,
};

// =============================================================================
// Index
// =============================================================================

#[tokio::test]
async fn test_index_without_cookie_redirects_to_login() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_index_with_session_greets_by_name() {
    let (router, _registry) = test_router();
    let id = login(&router, "Jane Doe").await;

    let response = send(&router, get_with_cookie("/", &id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Jane Doe"));
}

#[tokio::test]
async fn test_index_html_alias() {
    let (router, _registry) = test_router();
    let id = login(&router, "Grace Hopper").await;

    let response = send(&router, get_with_cookie("/index.html", &id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Grace Hopper"));

    let response = send(&router, get("/index.html")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_index_with_unknown_identifier_redirects() {
    let (router, _registry) = test_router();

    let response = send(&router, get_with_cookie("/", "never-issued")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_session_cookie_among_other_cookies() {
    let (router, _registry) = test_router();
    let id = login(&router, "Jane Doe").await;

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, format!("theme=dark; uuid={}; lang=en", id))
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let (router, _registry) = test_router();
    let jane = login(&router, "Jane Doe").await;
    let alan = login(&router, "Alan Turing").await;

    let body = body_string(send(&router, get_with_cookie("/", &jane)).await).await;
    assert!(body.contains("Jane Doe"));
    assert!(!body.contains("Alan Turing"));

    let body = body_string(send(&router, get_with_cookie("/", &alan)).await).await;
    assert!(body.contains("Alan Turing"));
}

// =============================================================================
// Time
// =============================================================================

#[tokio::test]
async fn test_time_anonymous() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/time")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guest"));
    assert!(body.contains("UTC"));
}

#[tokio::test]
async fn test_time_personalized() {
    let (router, _registry) = test_router();
    let id = login(&router, "Jane Doe").await;

    let response = send(&router, get_with_cookie("/time", &id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Jane Doe"));
    assert!(!body.contains("Guest"));
}

#[tokio::test]
async fn test_time_with_unknown_identifier() {
    let (router, _registry) = test_router();

    let response = send(&router, get_with_cookie("/time", "deleted")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Guest"));
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn test_logout_expires_cookie() {
    let (router, _registry) = test_router();

    let response = send(&router, get("/logout")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("uuid=deleted"));
    assert!(cookie.contains("Max-Age=-1"));
    assert!(cookie.contains("Path=/"));
    assert!(body_string(response).await.contains("logged out"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (router, _registry) = test_router();

    for _ in 0..3 {
        let response = send(&router, get("/logout")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=-1"));
    }
}

#[tokio::test]
async fn test_logout_accepts_any_method() {
    let (router, _registry) = test_router();

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(&router, request(method.clone(), "/logout")).await;
        assert_eq!(response.status(), StatusCode::OK, "method {}", method);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=-1"));
    }
}

#[tokio::test]
async fn test_logout_keeps_identity_record() {
    let (router, registry) = test_router();
    let id = login(&router, "Jane Doe").await;

    let response = send(&router, get_with_cookie("/logout", &id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Only the client's cookie is invalidated
    assert_eq!(registry.len().await, 1);
    assert_eq!(registry.name_of(&id).await.as_deref(), Some("Jane Doe"));

    // A client that kept the old cookie is still recognized
    let response = send(&router, get_with_cookie("/", &id)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_are_all_visible() {
    let (router, registry) = test_router();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let router = router.clone();
        handles.push(tokio::spawn(async move { login(&router, "Parallel Visitor").await }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    assert_eq!(registry.len().await, 32);
    for id in ids {
        let response = send(&router, get_with_cookie("/", &id)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
