//! Router configuration.
//!
//! # Route Structure
//!
//! ```text
//! /, /index.html    GET       - Greeting or redirect to login
//! /login            GET       - Login form
//! /login            POST      - Create session
//! /logout           any       - Expire session cookie
//! /time             GET       - Time page
//! /health           GET       - Health check (JSON)
//! anything else               - 404 page
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use session_greeter::identity::IdentityRegistry;
//! use session_greeter::server::{create_router, AppState, RouterConfig};
//! use session_greeter::view::TemplateSet;
//!
//! let registry = Arc::new(IdentityRegistry::new());
//! let state = AppState::new(registry, TemplateSet::builtin());
//! let router = create_router(state, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_handler, index_handler, login_form_handler, login_submit_handler, logout_handler,
    not_found_handler, time_handler, AppState,
};
use crate::identity::IdentityRegistry;
use crate::view::{Renderer, TemplateSet};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with tracing enabled.
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the application router.
///
/// Methods a route does not serve fall through to the 404 page, as do
/// unmatched paths.
pub fn create_router<R>(state: AppState<R>, config: RouterConfig) -> Router
where
    R: Renderer + 'static,
{
    let router = Router::new()
        .route(
            "/",
            get(index_handler::<R>).fallback(not_found_handler::<R>),
        )
        .route(
            "/index.html",
            get(index_handler::<R>).fallback(not_found_handler::<R>),
        )
        .route(
            "/login",
            get(login_form_handler::<R>)
                .post(login_submit_handler::<R>)
                .fallback(not_found_handler::<R>),
        )
        .route("/logout", any(logout_handler::<R>))
        .route(
            "/time",
            get(time_handler::<R>).fallback(not_found_handler::<R>),
        )
        .route("/health", get(health_handler))
        .fallback(not_found_handler::<R>)
        .with_state(state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Create a router with the built-in templates and a fresh registry.
///
/// Returns the registry handle alongside the router so callers can inspect
/// registered identities.
pub fn create_default_router() -> (Router, Arc<IdentityRegistry>) {
    let registry = Arc::new(IdentityRegistry::new());
    let state = AppState::new(Arc::clone(&registry), TemplateSet::builtin());
    (create_router(state, RouterConfig::new()), registry)
}

// =============================================================================
// Tests
// =============================================================================
