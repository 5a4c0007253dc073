//! Resolving unit keys back to descriptors
//!
//! Dependency maps hold identity keys, not descriptors; a resolver turns a
//! key into the right descriptor variant. Resolution only ever *reads*
//! already persisted metadata of previously compiled units.

use crate::{BridgeUnit, GeneratedUnit, MetadataStore, Result, UnitDescriptor, UnitKey};
use jasper_ast::TypeRegistry;

/// Maps a unit key to its descriptor
pub trait UnitResolver {
    fn resolve(&self, key: &UnitKey) -> Result<Box<dyn UnitDescriptor>>;
}

/// Default resolver: bridge declarations become [`BridgeUnit`]s, everything
/// else is loaded from its persisted record in the artifact directory.
pub struct ArtifactResolver<'a> {
    store: &'a MetadataStore,
    registry: &'a TypeRegistry,
}

impl<'a> ArtifactResolver<'a> {
    pub fn new(store: &'a MetadataStore, registry: &'a TypeRegistry) -> Self {
        Self { store, registry }
    }
}

impl UnitResolver for ArtifactResolver<'_> {
    fn resolve(&self, key: &UnitKey) -> Result<Box<dyn UnitDescriptor>> {
        if let Some(decl) = self.registry.get(key.as_str()) {
            if decl.is_bridge() {
                return Ok(Box::new(BridgeUnit::from_decl(decl, self.registry)?));
            }
        }
        let loaded: GeneratedUnit = self.store.load(key.as_str(), self.registry)?;
        Ok(Box::new(loaded))
    }
}

/// Resolve a unit's direct dependencies into descriptors, in deterministic
/// key order
pub fn resolve_dependencies(
    unit: &dyn UnitDescriptor,
    resolver: &dyn UnitResolver,
) -> Result<Vec<Box<dyn UnitDescriptor>>> {
    unit.direct_dependencies()
        .iter()
        .map(|key| resolver.resolve(key))
        .collect()
}
