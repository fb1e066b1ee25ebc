//! HTTP request handlers.
//!
//! Each route resolves to exactly one response shape:
//!
//! - `GET /`, `/index.html` - personalized greeting, or `302` to `/login`
//! - `GET /login` - login form
//! - `POST /login` - create a session and `302` to `/`, or `400` with the form
//! - `/logout` - expire the session cookie and confirm
//! - `GET /time` - current time, personalized when a session resolves
//! - anything else - `404` page
//! - `GET /health` - health check

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::RenderError;
use crate::identity::{IdentityRegistry, Person, PersonName, NAME_REQUIREMENTS};
use crate::view::{ErrorViewData, GreetingViewData, LoginViewData, Renderer, TimeViewData, View};

use super::session::{
    clear_identifier_cookie, set_identifier_cookie, SessionCookie, SESSION_MAX_AGE,
};

/// Minimal page used when even the error template cannot be rendered.
const FALLBACK_ERROR_PAGE: &str =
    "<!DOCTYPE html><html><head><title>Error</title></head><body><h1>500</h1><p>Internal server error</p></body></html>";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// Constructed once at startup and handed to every handler through Axum's
/// State extractor. The registry is the only mutable shared resource.
pub struct AppState<R: Renderer> {
    /// Identity registry shared by all requests
    pub registry: Arc<IdentityRegistry>,

    /// Renderer for HTML views
    pub renderer: Arc<R>,
}

impl<R: Renderer> AppState<R> {
    /// Create application state from a registry handle and a renderer.
    pub fn new(registry: Arc<IdentityRegistry>, renderer: R) -> Self {
        Self {
            registry,
            renderer: Arc::new(renderer),
        }
    }

    /// Resolve the visitor's display name from their session cookie.
    ///
    /// A missing cookie and an unknown identifier both yield `None`.
    pub async fn resolve_name(&self, session: &SessionCookie) -> Option<String> {
        let id = session.identifier()?;
        self.registry
            .name_of(id)
            .await
            .filter(|name| !name.is_empty())
    }
}

impl<R: Renderer> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Submitted display name; absent is treated as empty
    #[serde(default)]
    pub name: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// A view could not be rendered.
///
/// Carries the error page when one could still be produced; otherwise a
/// static fallback body is sent.
#[derive(Debug)]
pub struct HandlerError {
    pub error: RenderError,
    page: Option<String>,
}

impl HandlerError {
    pub fn new(error: RenderError) -> Self {
        Self { error, page: None }
    }

    /// Attach a rendered error page to send instead of the fallback.
    pub fn with_page(mut self, page: Option<String>) -> Self {
        self.page = page;
        self
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!(
            error_type = "render_error",
            status = StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            "Server error: {}",
            self.error
        );

        let body = self.page.unwrap_or_else(|| FALLBACK_ERROR_PAGE.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Render a view into an HTML response with the given status.
///
/// On failure, attempts the error view so the visitor still gets a page.
fn render_view<R: Renderer + ?Sized>(
    renderer: &R,
    status: StatusCode,
    view: &View,
) -> Result<Response, HandlerError> {
    match renderer.render(view) {
        Ok(body) => Ok((status, Html(body)).into_response()),
        Err(error) => {
            let page = renderer
                .render(&View::Error(ErrorViewData::internal()))
                .ok();
            Err(HandlerError::new(error).with_page(page))
        }
    }
}

/// Build a `302 Found` redirect with an empty body.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle the index page.
///
/// # Response
///
/// - `200 OK`: greeting for the resolved name
/// - `302 Found` to `/login`: no session, or the identifier is unknown
pub async fn index_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    session: SessionCookie,
) -> Result<Response, HandlerError> {
    match state.resolve_name(&session).await {
        Some(name) => render_view(
            state.renderer.as_ref(),
            StatusCode::OK,
            &View::Greeting(GreetingViewData { name }),
        ),
        None => {
            debug!(
                has_cookie = session.identifier().is_some(),
                "Anonymous visitor, redirecting to login"
            );
            Ok(found("/login"))
        }
    }
}

/// Handle `GET /login` by showing the login form.
pub async fn login_form_handler<R: Renderer>(
    State(state): State<AppState<R>>,
) -> Result<Response, HandlerError> {
    render_view(
        state.renderer.as_ref(),
        StatusCode::OK,
        &View::Login(LoginViewData::default()),
    )
}

/// Handle `POST /login`.
///
/// # Form Fields
///
/// - `name`: one or two words of 2-35 letters
///
/// # Response
///
/// - `302 Found` to `/` with `Set-Cookie: uuid=<id>; Max-Age=86400; Path=/`
/// - `400 Bad Request`: the login form with a validation message; nothing
///   is registered and no cookie is set. A body that is not a well-formed
///   form gets the same response.
pub async fn login_submit_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, HandlerError> {
    let parsed = match form {
        Ok(Form(form)) => PersonName::parse(&form.name).map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.body_text()),
    };

    let name = match parsed {
        Ok(name) => name,
        Err(reason) => {
            debug!(
                error_type = "invalid_name",
                status = StatusCode::BAD_REQUEST.as_u16(),
                "Rejected login: {}",
                reason
            );
            return render_view(
                state.renderer.as_ref(),
                StatusCode::BAD_REQUEST,
                &View::Login(LoginViewData::with_error(NAME_REQUIREMENTS)),
            );
        }
    };

    let person = Person::new(name);
    let id = person.id().to_string();
    state.registry.add(person).await;
    info!(id = %id, "New session created");

    let mut response = found("/");
    set_identifier_cookie(response.headers_mut(), &id, SESSION_MAX_AGE);
    Ok(response)
}

/// Handle `/logout` for any method.
///
/// Always expires the session cookie. The registry entry is kept.
pub async fn logout_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    session: SessionCookie,
) -> Result<Response, HandlerError> {
    let mut response = render_view(state.renderer.as_ref(), StatusCode::OK, &View::LoggedOut)?;
    clear_identifier_cookie(response.headers_mut());

    if let Some(id) = session.identifier() {
        debug!(id = id, "Session cookie cleared");
    }
    Ok(response)
}

/// Handle `GET /time`.
///
/// Always `200 OK`; anonymous visitors get the page without a name.
pub async fn time_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    session: SessionCookie,
) -> Result<Response, HandlerError> {
    let name = state.resolve_name(&session).await.unwrap_or_default();
    render_view(
        state.renderer.as_ref(),
        StatusCode::OK,
        &View::Time(TimeViewData::now(name)),
    )
}

/// Catch-all for unmatched paths and methods.
pub async fn not_found_handler<R: Renderer>(
    State(state): State<AppState<R>>,
    uri: Uri,
) -> Result<Response, HandlerError> {
    debug!(
        error_type = "not_found",
        status = StatusCode::NOT_FOUND.as_u16(),
        "Resource not found: {}",
        uri.path()
    );
    render_view(state.renderer.as_ref(), StatusCode::NOT_FOUND, &View::NotFound)
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "1.0.1"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
