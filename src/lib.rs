//! # Session Greeter
//!
//! A small HTTP service that identifies visitors by an opaque identifier held
//! in a browser cookie and greets them by the name they logged in with.
//!
//! ## Features
//!
//! - **Cookie sessions**: A single `uuid` cookie names the visitor's identity
//! - **In-memory registry**: Concurrent, append-only map from identifier to person
//! - **Typed views**: Each page carries a statically known data payload
//! - **Template sets**: Built-in HTML templates, or a directory loaded at startup
//!
//! ## Architecture
//!
//! - [`identity`] - Person records, name validation and the identity registry
//! - [`server`] - Axum handlers, session cookie codec and routes
//! - [`view`] - View data types and the template renderer
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use session_greeter::{create_router, AppState, IdentityRegistry, RouterConfig, TemplateSet};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = Arc::new(IdentityRegistry::new());
//!     let state = AppState::new(registry, TemplateSet::builtin());
//!     let router = create_router(state, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod server;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{NameError, RenderError, TemplateLoadError};
pub use identity::{IdentityRegistry, Person, PersonName};
pub use server::{
    create_default_router, create_router, AppState, HandlerError, RouterConfig, SessionCookie,
    SESSION_COOKIE_NAME,
};
pub use view::{Renderer, TemplateSet, View, REQUIRED_TEMPLATES};
