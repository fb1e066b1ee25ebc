//! HTTP server layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │   session   │  │        routes           │  │
//! │  │ (requests)  │  │  (cookie)   │  │   (route table)         │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └──────────┬───────────────────────────────────────┬──────────────┘
//!            ▼                                       ▼
//!   IdentityRegistry                           Renderer (views)
//! ```

pub mod handlers;
pub mod routes;
pub mod session;

pub use handlers::{
    health_handler, index_handler, login_form_handler, login_submit_handler, logout_handler,
    not_found_handler, time_handler, AppState, HandlerError, HealthResponse, LoginForm,
};
pub use routes::{create_default_router, create_router, RouterConfig};
pub use session::{
    clear_identifier_cookie, identifier_from_headers, session_cookie, set_identifier_cookie,
    SessionCookie, LOGGED_OUT_VALUE, LOGOUT_MAX_AGE, SESSION_COOKIE_NAME, SESSION_MAX_AGE,
};
