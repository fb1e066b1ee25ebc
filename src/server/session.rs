//! Session cookie codec.
//!
//! The session is a single cookie named [`SESSION_COOKIE_NAME`] whose value
//! is the visitor's identifier. The value is opaque: it is neither signed
//! nor encrypted, so possession of the cookie is the only proof of identity.
//!
//! # Cookie Lifecycle
//!
//! ```text
//! login   Set-Cookie: uuid=<id>; Max-Age=86400; Path=/
//! logout  Set-Cookie: uuid=deleted; Max-Age=-1; Path=/
//! ```
//!
//! A negative max-age asks the browser to drop the cookie immediately.

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use tracing::warn;

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE_NAME: &str = "uuid";

/// Max-age for a freshly issued session cookie (one day).
pub const SESSION_MAX_AGE: i64 = 86400;

/// Max-age used on logout to force client-side expiry.
pub const LOGOUT_MAX_AGE: i64 = -1;

/// Placeholder value written on logout.
pub const LOGGED_OUT_VALUE: &str = "deleted";

/// Read the session identifier from a request's `Cookie` headers.
///
/// Returns `None` when no session cookie is present, which is the ordinary
/// "never logged in" case. The value is not validated here.
pub fn identifier_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim().to_string())
}

/// Build the `Set-Cookie` directive for a session identifier.
pub fn session_cookie(identifier: &str, max_age: i64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        SESSION_COOKIE_NAME, identifier, max_age
    )
}

/// Append a session `Set-Cookie` header to a response header map.
///
/// Serves both login (positive max-age) and logout (negative max-age).
/// An identifier that cannot be carried in a header value is logged and
/// skipped.
pub fn set_identifier_cookie(headers: &mut HeaderMap, identifier: &str, max_age: i64) {
    match HeaderValue::from_str(&session_cookie(identifier, max_age)) {
        Ok(value) => {
            headers.append(SET_COOKIE, value);
        }
        Err(e) => {
            warn!(max_age = max_age, "Refusing to set session cookie: {}", e);
        }
    }
}

/// Write the cookie that ends a session on the client.
pub fn clear_identifier_cookie(headers: &mut HeaderMap) {
    set_identifier_cookie(headers, LOGGED_OUT_VALUE, LOGOUT_MAX_AGE);
}

// =============================================================================
// Axum Extractor
// =============================================================================

/// Axum extractor for the session identifier.
///
/// Never rejects: a missing cookie yields `SessionCookie(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie(pub Option<String>);

impl SessionCookie {
    pub fn identifier(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionCookie(identifier_from_headers(&parts.headers)))
    }
}

// =============================================================================
// Tests
// =============================================================================
