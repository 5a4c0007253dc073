//! Dependency classification and its textual prefix encoding

use serde::{Deserialize, Serialize};

/// Why one unit references another.
///
/// The derived ordering (`Extends < Static < Other`) ranks two *different*
/// units against each other during emission; it never ranks kinds on the
/// same edge. When the same edge is observed repeatedly, the strongest kind
/// wins (see [`DependencyKind::strongest`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    /// Subtype relation: the referenced unit is a superclass or interface
    Extends,
    /// Static member access or constructor invocation
    Static,
    /// Any other reference (parameter types, field types, locals)
    Other,
}

impl DependencyKind {
    /// Reserved marker prefixing `Extends` and `Static` entries in the
    /// persisted `dependencies` list; empty for `Other`
    pub fn prefix(self) -> &'static str {
        match self {
            DependencyKind::Extends => "!",
            DependencyKind::Static => "#",
            DependencyKind::Other => "",
        }
    }

    /// Encode a qualified name as a dependency-list token
    pub fn with_prefix(self, qualified_name: &str) -> String {
        format!("{}{}", self.prefix(), qualified_name)
    }

    /// Decode a dependency-list token into its kind and bare name
    pub fn parse_token(token: &str) -> (DependencyKind, &str) {
        let token = token.trim();
        if let Some(rest) = token.strip_prefix('!') {
            (DependencyKind::Extends, rest)
        } else if let Some(rest) = token.strip_prefix('#') {
            (DependencyKind::Static, rest)
        } else {
            (DependencyKind::Other, token)
        }
    }

    /// The stronger of two kinds observed for the same edge
    pub fn strongest(a: DependencyKind, b: DependencyKind) -> DependencyKind {
        a.min(b)
    }
}
