//! Nominal unit identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key for a unit: two descriptors describe the same unit iff their
/// qualified source names are equal, regardless of any other state.
///
/// Graph and set structures key on this instead of on full descriptors, so
/// mutating a descriptor's dependency map or namespace can never invalidate
/// a map entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitKey(String);

impl UnitKey {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UnitKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
