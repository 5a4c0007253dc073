//! Jasper Meta - unit descriptors and durable compilation metadata
//!
//! Every compiled declaration is described by a unit descriptor: either
//! *generated* (produced by this compiler, backed by source) or *bridge*
//! (a pre-existing JavaScript declaration with no generated body). A
//! generated unit's dependency set, namespace and emitted-file reference are
//! persisted in a small flat record next to its compiled artifact, so that
//! downstream builds can consume a library without the original sources.

mod descriptor;
mod error;
mod key;
mod record;
mod resolver;

pub use descriptor::{BridgeUnit, GeneratedUnit, GeneratedUnitBuilder, UnitDescriptor};
pub use error::{MetaError, Result};
pub use key::UnitKey;
pub use record::{decode_dependencies, encode_dependencies, MetadataStore};
pub use resolver::{resolve_dependencies, ArtifactResolver, UnitResolver};
