//! In-memory identity registry.
//!
//! Maps session identifiers to [`Person`] records for the lifetime of the
//! process. The registry is append-only: there is no update or delete, and
//! nothing survives a restart.
//!
//! # Thread Safety
//!
//! The mapping sits behind a [`tokio::sync::RwLock`], so `add` and `name_of`
//! can be called concurrently from any number of in-flight requests. A write
//! completed by one request is visible to every read that starts after it.
//!
//! # Example
//!
//! ```
//! use session_greeter::identity::{IdentityRegistry, Person, PersonName};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = IdentityRegistry::new();
//!
//!     let person = Person::new(PersonName::parse("Jane Doe").unwrap());
//!     let id = person.id().to_string();
//!     registry.add(person).await;
//!
//!     assert_eq!(registry.name_of(&id).await.as_deref(), Some("Jane Doe"));
//!     assert_eq!(registry.name_of("unknown").await, None);
//! }
//! ```

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::person::Person;

/// Process-wide store of people keyed by identifier.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    people: RwLock<HashMap<String, Person>>,
}

impl IdentityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person keyed by its identifier.
    ///
    /// No uniqueness check is made here; callers always hand in a person
    /// built with [`Person::new`], which generates a fresh identifier.
    pub async fn add(&self, person: Person) {
        let mut people = self.people.write().await;
        debug!(id = person.id(), "Registering person");
        people.insert(person.id().to_string(), person);
    }

    /// Look up the display name for an identifier.
    ///
    /// `None` is the ordinary anonymous outcome, never an error.
    pub async fn name_of(&self, id: &str) -> Option<String> {
        self.people
            .read()
            .await
            .get(id)
            .map(|person| person.name().to_string())
    }

    /// Whether an identifier is registered.
    pub async fn contains(&self, id: &str) -> bool {
        self.people.read().await.contains_key(id)
    }

    /// Number of registered people.
    pub async fn len(&self) -> usize {
        self.people.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.people.read().await.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
