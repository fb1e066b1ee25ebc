//! Views and rendering.
//!
//! Every page the server produces is described by a [`View`] value. Each
//! variant carries exactly the data its template needs, and a [`Renderer`]
//! turns the view into an HTML body.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   View    ┌──────────────┐   String   ┌──────────┐
//! │   handlers   │ ────────► │   Renderer   │ ─────────► │ response │
//! └──────────────┘           │ (TemplateSet)│            └──────────┘
//!                            └──────────────┘
//! ```
//!
//! Templates use `{{field}}` placeholders. All substituted values are
//! HTML-escaped.

mod builtin;
mod template;

use chrono::{Local, Utc};

pub use template::{html_escape, Renderer, TemplateSet};

/// Name shown when a visitor has no resolved identity.
pub const ANONYMOUS_NAME: &str = "Guest";

/// Local clock format, e.g. `3:04:05 PM`.
pub const LOCAL_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// UTC clock format, e.g. `15:04:05 UTC`.
pub const UTC_TIME_FORMAT: &str = "%H:%M:%S UTC";

/// Template names for every view the server can render.
pub const REQUIRED_TEMPLATES: &[&str] = &["index", "login", "logout", "time", "http404", "error"];

// =============================================================================
// View Data
// =============================================================================

/// Data for the personalized greeting on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingViewData {
    pub name: String,
}

/// Data for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginViewData {
    /// Validation message from a rejected submission
    pub error: Option<String>,
}

impl LoginViewData {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Data for the time page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeViewData {
    /// Resolved name, empty for anonymous visitors
    pub name: String,

    /// Server local time
    pub local_time: String,

    /// Time in UTC
    pub utc_time: String,
}

impl TimeViewData {
    /// Capture the current clock readings for the given name.
    pub fn now(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_time: Local::now().format(LOCAL_TIME_FORMAT).to_string(),
            utc_time: Utc::now().format(UTC_TIME_FORMAT).to_string(),
        }
    }
}

/// Data for the generic error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorViewData {
    pub status: u16,
    pub message: String,
}

impl ErrorViewData {
    pub fn internal() -> Self {
        Self {
            status: 500,
            message: "Something went wrong while building this page.".to_string(),
        }
    }
}

// =============================================================================
// View
// =============================================================================

/// A page to render, with the data its template requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Greeting(GreetingViewData),
    Login(LoginViewData),
    LoggedOut,
    Time(TimeViewData),
    NotFound,
    Error(ErrorViewData),
}

impl View {
    /// Name of the template used for this view.
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Greeting(_) => "index",
            View::Login(_) => "login",
            View::LoggedOut => "logout",
            View::Time(_) => "time",
            View::NotFound => "http404",
            View::Error(_) => "error",
        }
    }

    /// Placeholder values supplied to the template, unescaped.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            View::Greeting(data) => vec![("name", data.name.clone())],
            View::Login(data) => vec![("error", data.error.clone().unwrap_or_default())],
            View::LoggedOut | View::NotFound => Vec::new(),
            View::Time(data) => {
                let display_name = if data.name.is_empty() {
                    ANONYMOUS_NAME.to_string()
                } else {
                    data.name.clone()
                };
                vec![
                    ("name", data.name.clone()),
                    ("display_name", display_name),
                    ("local_time", data.local_time.clone()),
                    ("utc_time", data.utc_time.clone()),
                ]
            }
            View::Error(data) => vec![
                ("status", data.status.to_string()),
                ("message", data.message.clone()),
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
