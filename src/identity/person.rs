//! Person records and display-name validation.

use std::fmt;

use uuid::Uuid;

use crate::error::NameError;

/// Minimum letters in the first word of a name.
pub const MIN_FIRST_WORD_LEN: usize = 2;

/// Maximum letters in either word of a name.
pub const MAX_WORD_LEN: usize = 35;

/// Message shown to visitors whose name is rejected.
pub const NAME_REQUIREMENTS: &str = "Please enter one or two words of 2 to 35 letters each.";

// =============================================================================
// PersonName
// =============================================================================

/// A display name that satisfies the name grammar.
///
/// The grammar is one run of 2-35 ASCII letters, optionally followed by a
/// single space and a second run of 0-35 ASCII letters. Anything else is
/// rejected by [`PersonName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a raw submitted name.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }

        if let Some(c) = raw.chars().find(|c| !c.is_ascii_alphabetic() && *c != ' ') {
            return Err(NameError::InvalidCharacter(c));
        }

        let (first, second) = match raw.split_once(' ') {
            Some((first, second)) => (first, Some(second)),
            None => (raw, None),
        };

        if first.is_empty() {
            return Err(NameError::TooManySpaces);
        }
        if !(MIN_FIRST_WORD_LEN..=MAX_WORD_LEN).contains(&first.len()) {
            return Err(NameError::FirstWordLength(first.len()));
        }

        if let Some(second) = second {
            if second.contains(' ') {
                return Err(NameError::TooManySpaces);
            }
            if second.len() > MAX_WORD_LEN {
                return Err(NameError::SecondWordTooLong(second.len()));
            }
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Person
// =============================================================================

/// An immutable (identifier, name) record.
///
/// The identifier is generated at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    name: PersonName,
}

impl Person {
    /// Create a person with a freshly generated identifier.
    pub fn new(name: PersonName) -> Self {
        Self {
            id: generate_identifier(),
            name,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }
}

/// Generate a random 128-bit identifier in hyphenated UUID form.
pub fn generate_identifier() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Tests
// =============================================================================
