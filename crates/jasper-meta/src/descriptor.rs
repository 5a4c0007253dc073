//! Unit descriptors: generated and bridge variants
//!
//! Generated units are built up incrementally while their declaration is
//! being visited, then frozen; the mutable phase lives in
//! [`GeneratedUnitBuilder`] and is never visible outside the generation call.
//! Bridge units are constructed once from external declaration metadata and
//! never change.

use crate::{MetaError, Result, UnitKey};
use jasper_ast::{TypeDecl, TypeRegistry};
use jasper_graph::DependencyKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capability interface shared by both descriptor variants
pub trait UnitDescriptor {
    /// Fully qualified source name; the unit's identity
    fn source_name(&self) -> &str;

    /// Resolved namespace. `None` means not yet resolved; `Some("")` means
    /// explicitly no namespace. The two are never conflated.
    fn namespace(&self) -> Option<&str>;

    /// Emitted (or pre-authored) JavaScript file references, in order
    fn js_files(&self) -> &[String];

    /// Direct dependencies with the strongest kind observed per edge
    fn dependency_map(&self) -> &BTreeMap<UnitKey, DependencyKind>;

    /// Direct dependency keys, in deterministic order
    fn direct_dependencies(&self) -> Vec<UnitKey> {
        self.dependency_map().keys().cloned().collect()
    }

    /// Innermost unqualified identifier of the source name
    fn simple_name(&self) -> &str {
        let name = self.source_name();
        name.rsplit('.').next().unwrap_or(name)
    }

    /// Target display name: `namespace + "." + simpleName` when a non-empty
    /// namespace is resolved, else the simple name alone
    fn js_class_name(&self) -> String {
        match self.namespace() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.simple_name()),
            _ => self.simple_name().to_string(),
        }
    }

    /// Identity key for graph and set membership
    fn key(&self) -> UnitKey {
        UnitKey::new(self.source_name())
    }
}

/// A unit produced by this compiler, backed by source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedUnit {
    qualified_name: String,
    namespace: Option<String>,
    js_files: Vec<String>,
    dependencies: BTreeMap<UnitKey, DependencyKind>,
    /// True when reconstructed from a persisted record; such descriptors
    /// are read-only and refuse `store`
    loaded: bool,
}

impl GeneratedUnit {
    pub(crate) fn from_record(
        qualified_name: String,
        namespace: String,
        js_files: Vec<String>,
        dependencies: BTreeMap<UnitKey, DependencyKind>,
    ) -> Self {
        Self {
            qualified_name,
            namespace: Some(namespace),
            js_files,
            dependencies,
            loaded: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl UnitDescriptor for GeneratedUnit {
    fn source_name(&self) -> &str {
        &self.qualified_name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn js_files(&self) -> &[String] {
        &self.js_files
    }

    fn dependency_map(&self) -> &BTreeMap<UnitKey, DependencyKind> {
        &self.dependencies
    }
}

impl PartialEq for GeneratedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for GeneratedUnit {}

impl std::hash::Hash for GeneratedUnit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

/// Mutable accumulator for one generation pass.
///
/// Created empty when generation of a unit starts, populated as declarations
/// are visited, and consumed into an immutable [`GeneratedUnit`] when the
/// pass completes. Partially built state never escapes the generation call.
#[derive(Debug)]
pub struct GeneratedUnitBuilder {
    qualified_name: String,
    namespace: Option<String>,
    js_files: Vec<String>,
    dependencies: BTreeMap<UnitKey, DependencyKind>,
}

impl GeneratedUnitBuilder {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            namespace: None,
            js_files: Vec::new(),
            dependencies: BTreeMap::new(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Record a dependency edge. Self-edges and anonymous (empty) names are
    /// dropped; a repeated edge keeps the strongest kind observed.
    pub fn add_dependency(&mut self, qualified_name: &str, kind: DependencyKind) {
        if qualified_name.is_empty() || qualified_name == self.qualified_name {
            return;
        }
        let key = UnitKey::new(qualified_name);
        self.dependencies
            .entry(key)
            .and_modify(|existing| *existing = DependencyKind::strongest(*existing, kind))
            .or_insert(kind);
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    pub fn set_js_file(&mut self, reference: impl Into<String>) {
        self.js_files = vec![reference.into()];
    }

    /// Freeze into the immutable descriptor
    pub fn finish(self) -> GeneratedUnit {
        GeneratedUnit {
            qualified_name: self.qualified_name,
            namespace: self.namespace,
            js_files: self.js_files,
            dependencies: self.dependencies,
            loaded: false,
        }
    }
}

/// A pre-existing external declaration mapped onto pre-authored JavaScript
/// files. Bridges never depend on generated units; the dependency map is a
/// fixed empty placeholder kept for the shared interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeUnit {
    qualified_name: String,
    namespace: String,
    js_files: Vec<String>,
    dependencies: BTreeMap<UnitKey, DependencyKind>,
}

impl BridgeUnit {
    /// Build from a bridge declaration. Namespace resolution happens
    /// immediately; when nothing is annotated anywhere the namespace is
    /// fixed to the explicit empty string.
    pub fn from_decl(decl: &TypeDecl, registry: &TypeRegistry) -> Result<Self> {
        let namespace = registry.resolve_namespace(decl).unwrap_or_default();

        let mut js_files = Vec::new();
        if let Some(bridge) = &decl.bridge {
            for src in &bridge.sources {
                if src.is_empty() {
                    continue;
                }
                if src.chars().any(char::is_whitespace) {
                    return Err(MetaError::InvalidSourceReference {
                        unit: decl.qualified_name.clone(),
                        reference: src.clone(),
                    });
                }
                js_files.push(src.clone());
            }
        }

        Ok(Self {
            qualified_name: decl.qualified_name.clone(),
            namespace,
            js_files,
            dependencies: BTreeMap::new(),
        })
    }
}

impl UnitDescriptor for BridgeUnit {
    fn source_name(&self) -> &str {
        &self.qualified_name
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn js_files(&self) -> &[String] {
        &self.js_files
    }

    fn dependency_map(&self) -> &BTreeMap<UnitKey, DependencyKind> {
        &self.dependencies
    }
}

impl PartialEq for BridgeUnit {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for BridgeUnit {}

impl std::hash::Hash for BridgeUnit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}
