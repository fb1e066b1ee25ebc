//! Template-backed renderer.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::View;
use crate::error::{RenderError, TemplateLoadError};

/// Turns a [`View`] into a response body.
pub trait Renderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, RenderError>;
}

/// Escape HTML special characters to prevent XSS attacks.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// TemplateSet
// =============================================================================

/// A named set of HTML templates with `{{field}}` placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, String>,
}

impl TemplateSet {
    /// Create an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates compiled into the binary.
    pub fn builtin() -> Self {
        builtin::TEMPLATES
            .iter()
            .fold(Self::new(), |set, (name, source)| {
                set.with_template(*name, *source)
            })
    }

    /// Load every `*.html` file in a directory, keyed by file stem.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateLoadError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| TemplateLoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut set = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| TemplateLoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let source = fs::read_to_string(&path).map_err(|source| TemplateLoadError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(template = name, path = %path.display(), "Loaded template");
            set.templates.insert(name.to_string(), source);
        }

        Ok(set)
    }

    /// Add or replace a template.
    pub fn with_template(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(name.into(), source.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Check that every required template is present.
    pub fn ensure(&self, required: &[&str]) -> Result<(), TemplateLoadError> {
        match required.iter().find(|name| !self.contains(name)) {
            Some(missing) => Err(TemplateLoadError::MissingTemplate(missing.to_string())),
            None => Ok(()),
        }
    }
}

impl Renderer for TemplateSet {
    fn render(&self, view: &View) -> Result<String, RenderError> {
        let name = view.template_name();
        let source = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::MissingTemplate(name.to_string()))?;

        fill(name, source, &view.fields())
    }
}

/// Substitute `{{field}}` placeholders with escaped values.
fn fill(name: &str, source: &str, fields: &[(&'static str, String)]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| RenderError::UnterminatedPlaceholder(name.to_string()))?;

        let key = after[..end].trim();
        let value = fields
            .iter()
            .find(|(field, _)| *field == key)
            .map(|(_, value)| value)
            .ok_or_else(|| RenderError::UnknownField {
                template: name.to_string(),
                field: key.to_string(),
            })?;

        out.push_str(&html_escape(value));
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

// =============================================================================
// Tests
// =============================================================================
