use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a def within a loaded catalog.
///
/// Def names are case-sensitive opaque strings. Generated defs derive
/// their name from the source def with a kind prefix, e.g.
/// `NonSterile_BionicEye`, so a stable source name always maps to the
/// same generated names across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefName(String);

impl DefName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DefName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for DefName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Allows map lookups keyed by DefName to take a plain &str.
impl Borrow<str> for DefName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
