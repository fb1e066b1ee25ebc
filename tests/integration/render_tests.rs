//! Render failure integration tests.
//!
//! Tests verify:
//! - A missing template yields a 500 for that request only
//! - The error template is used when it exists, a static page otherwise
//! - The server keeps serving other routes after a render failure
//! - Templates loaded from a directory drive the responses

use std::fs;

use axum::http::StatusCode;

use session_greeter::TemplateSet;

use super::test_utils::{
    body_string, get, get_with_cookie, login, post_login, router_with_templates, send, set_cookie,
};

#[tokio::test]
async fn test_missing_template_is_500() {
    let templates = TemplateSet::new().with_template("http404", "<p>gone</p>");
    let (router, _registry) = router_with_templates(templates);

    let response = send(&router, get("/time")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("500"));
}

#[tokio::test]
async fn test_missing_template_uses_error_view() {
    let templates =
        TemplateSet::new().with_template("error", "<h1>Oops {{status}}</h1><p>{{message}}</p>");
    let (router, _registry) = router_with_templates(templates);

    let response = send(&router, get("/login")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_string(response).await.contains("Oops 500"));
}

#[tokio::test]
async fn test_server_keeps_serving_after_render_failure() {
    let templates = TemplateSet::new()
        .with_template("time", "<p>{{display_name}} {{local_time}} {{utc_time}}</p>");
    let (router, registry) = router_with_templates(templates);

    let response = send(&router, get("/logout")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(set_cookie(&response).is_none());

    let response = send(&router, get("/time")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let id = login(&router, "Jane Doe").await;
    assert_eq!(registry.name_of(&id).await.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_rejected_login_with_missing_template_mutates_nothing() {
    let (router, registry) = router_with_templates(TemplateSet::new());

    let response = send(&router, post_login("A1")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(set_cookie(&response).is_none());
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_templates_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("http404.html"), "<h1>custom missing page</h1>").unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Welcome back {{name}}</h1>").unwrap();

    let templates = TemplateSet::from_dir(dir.path()).unwrap();
    let (router, _registry) = router_with_templates(templates);

    let response = send(&router, get("/nowhere")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("custom missing page"));

    let id = login(&router, "Jane Doe").await;
    let response = send(&router, get_with_cookie("/", &id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "<h1>Welcome back Jane Doe</h1>");
}

