//! Error types for descriptor and metadata operations
//!
//! Unit-scoped failures carry the owning unit's qualified source name so a
//! batch driver can report one error per failing unit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetaError>;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("{unit}: IO error: {source}")]
    Io {
        unit: String,
        #[source]
        source: io::Error,
    },

    #[error("{unit}: unable to create metadata directory {path}")]
    DirectoryCreation {
        unit: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `store` called on a descriptor reconstructed from a persisted record
    #[error("{unit}: this descriptor was loaded read-only")]
    ReadOnly { unit: String },

    /// The persisted `js` entry does not parse as a file reference
    #[error("{unit}: malformed emitted-file reference '{reference}'")]
    InvalidJsReference { unit: String, reference: String },

    /// A bridge declaration's external-source annotation does not parse
    #[error("{unit}: malformed external-source reference '{reference}'")]
    InvalidSourceReference { unit: String, reference: String },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}
