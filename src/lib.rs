//! Jasper - an object-oriented-source to JavaScript transpiler core
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use jasper_ast as ast;
pub use jasper_codegen as codegen;
pub use jasper_graph as graph;
pub use jasper_js as js;
pub use jasper_meta as meta;
