//! Per-unit generation context
//!
//! One context per unit generation; it owns the unit's descriptor builder
//! and the read-only capabilities contributors need (registry, naming).
//! Nothing here is shared between concurrently generated units.

use crate::names::JsNameProvider;
use jasper_ast::{TypeDecl, TypeRegistry};
use jasper_graph::DependencyKind;
use jasper_meta::{GeneratedUnit, GeneratedUnitBuilder};

pub struct GenerationContext<'a> {
    registry: &'a TypeRegistry,
    names: &'a dyn JsNameProvider,
    decl: &'a TypeDecl,
    builder: GeneratedUnitBuilder,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        decl: &'a TypeDecl,
        registry: &'a TypeRegistry,
        names: &'a dyn JsNameProvider,
    ) -> Self {
        Self {
            registry,
            names,
            decl,
            builder: GeneratedUnitBuilder::new(&decl.qualified_name),
        }
    }

    /// The declaration being generated
    pub fn decl(&self) -> &TypeDecl {
        self.decl
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.registry
    }

    pub fn names(&self) -> &dyn JsNameProvider {
        self.names
    }

    /// Qualified source name of the unit being generated
    pub fn unit_name(&self) -> &str {
        &self.decl.qualified_name
    }

    /// JavaScript name of a referenced type
    pub fn type_name(&self, qualified_name: &str) -> String {
        self.names.type_name(self.registry, qualified_name)
    }

    /// Record a dependency edge on the unit under construction
    pub fn record_dependency(&mut self, qualified_name: &str, kind: DependencyKind) {
        self.builder.add_dependency(qualified_name, kind);
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.builder.set_namespace(namespace);
    }

    pub fn set_js_file(&mut self, reference: impl Into<String>) {
        self.builder.set_js_file(reference);
    }

    /// Freeze the descriptor once generation of the unit completes
    pub fn finish(self) -> GeneratedUnit {
        self.builder.finish()
    }
}
