//! Generation errors, always tagged with the owning unit

use jasper_meta::MetaError;
use thiserror::Error;

/// A unit-scoped generation failure. Carries the qualified source name of
/// the unit being generated so batch drivers can key failures per unit.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("{unit}: overload group '{method}' has more than one implementation")]
    AmbiguousOverload { unit: String, method: String },

    #[error("{unit}: the implementation of '{method}' is not the most generic overload")]
    NotMostGeneric { unit: String, method: String },

    #[error("{unit}: '{name}' is a reserved word and cannot be used as a parameter name")]
    ReservedParameterName { unit: String, name: String },

    #[error("{unit}: contributor chain produced no fragment for an expression")]
    MissingFragment { unit: String },

    #[error("{unit}: bridge units have no generated body")]
    BridgeUnit { unit: String },

    #[error("{unit}: metadata persistence failed")]
    Meta {
        unit: String,
        #[source]
        source: MetaError,
    },
}

impl GenError {
    /// The qualified source name of the failing unit
    pub fn unit(&self) -> &str {
        match self {
            GenError::AmbiguousOverload { unit, .. } => unit,
            GenError::NotMostGeneric { unit, .. } => unit,
            GenError::ReservedParameterName { unit, .. } => unit,
            GenError::MissingFragment { unit } => unit,
            GenError::BridgeUnit { unit } => unit,
            GenError::Meta { unit, .. } => unit,
        }
    }
}
