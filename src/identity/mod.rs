//! Visitor identities.
//!
//! A [`Person`] pairs a generated identifier with a validated display name.
//! The [`IdentityRegistry`] holds every person created since startup and is
//! shared by all request handlers.

mod person;
mod registry;

pub use person::{
    generate_identifier, Person, PersonName, MAX_WORD_LEN, MIN_FIRST_WORD_LEN, NAME_REQUIREMENTS,
};
pub use registry::IdentityRegistry;
