use std::path::PathBuf;

use thiserror::Error;

/// Reasons a submitted display name is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Nothing was submitted
    #[error("Name is empty")]
    Empty,

    /// A character other than an ASCII letter or the single separator
    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(char),

    /// First word must be 2 to 35 letters
    #[error("First word must be 2-35 letters, got {0}")]
    FirstWordLength(usize),

    /// Second word may hold at most 35 letters
    #[error("Second word must be at most 35 letters, got {0}")]
    SecondWordTooLong(usize),

    /// More than one space, or a leading space
    #[error("Name may contain at most one separating space")]
    TooManySpaces,
}

/// Errors raised while turning a view into a response body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No template is registered under the view's name
    #[error("Template not found: {0}")]
    MissingTemplate(String),

    /// Template references a field the view does not provide
    #[error("Template {template} references unknown field {field}")]
    UnknownField { template: String, field: String },

    /// A `{{` placeholder was never closed
    #[error("Template {0} has an unterminated placeholder")]
    UnterminatedPlaceholder(String),
}

/// Errors raised while loading templates at startup
#[derive(Debug, Error)]
pub enum TemplateLoadError {
    /// Directory or file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A view required by the server has no template
    #[error("Missing required template: {0}")]
    MissingTemplate(String),
}
