//! Type registry and namespace resolution
//!
//! The registry indexes every resolved declaration the front end handed us,
//! keyed by qualified source name. It answers the two structural questions
//! the rest of the pipeline needs: ancestry (for emission ordering) and
//! namespace resolution (for target naming).

use crate::TypeDecl;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// All resolved declarations of a compilation batch, by qualified name
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDecl>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, replacing any previous one with the same name
    pub fn insert(&mut self, decl: TypeDecl) {
        self.types.insert(decl.qualified_name.clone(), decl);
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.types.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `ancestor` is a strict transitive supertype of `descendant`,
    /// through any mix of superclass and interface edges.
    ///
    /// Tolerates cyclic hierarchies: each type is expanded at most once, so
    /// two mutually dependent declarations cannot loop the walk.
    pub fn is_ancestor_of(&self, ancestor: &str, descendant: &str) -> bool {
        if ancestor == descendant {
            return false;
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut pending: Vec<&str> = vec![descendant];

        while let Some(name) = pending.pop() {
            if !seen.insert(name) {
                continue;
            }
            let Some(decl) = self.types.get(name) else {
                continue;
            };
            if let Some(sup) = &decl.superclass {
                if sup == ancestor {
                    return true;
                }
                pending.push(sup);
            }
            for itf in &decl.interfaces {
                if itf == ancestor {
                    return true;
                }
                pending.push(itf);
            }
        }
        false
    }

    /// Namespace annotation declared directly on the named type, without
    /// walking enclosing declarations. Used as the legacy fallback when a
    /// persisted record predates the namespace entry.
    pub fn declared_namespace(&self, qualified_name: &str) -> Option<&str> {
        self.types
            .get(qualified_name)
            .and_then(|d| d.namespace.as_deref())
    }

    /// Resolve the logical namespace of a declaration: its own annotation if
    /// present, otherwise the nearest annotation on the enclosing-unit chain.
    ///
    /// Returns `None` when no annotation is found anywhere; callers decide
    /// the empty-string fallback policy (bridge units apply it immediately,
    /// generated units may defer until persistence).
    pub fn resolve_namespace(&self, decl: &TypeDecl) -> Option<String> {
        if let Some(ns) = &decl.namespace {
            return Some(ns.clone());
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = decl.enclosing.as_deref();
        while let Some(name) = current {
            if !seen.insert(name) {
                break;
            }
            let outer = self.types.get(name)?;
            if let Some(ns) = &outer.namespace {
                return Some(ns.clone());
            }
            current = outer.enclosing.as_deref();
        }
        None
    }
}
