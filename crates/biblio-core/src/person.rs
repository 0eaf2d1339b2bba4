use std::fmt;

use serde::{Deserialize, Serialize};

/// A person known to the library, identified purely by name.
///
/// Equality and hashing are structural over both name fields: two `Person`
/// values with the same names are indistinguishable to a [`Library`].
///
/// [`Library`]: crate::Library
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Person {
    /// Create a new person from a first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
