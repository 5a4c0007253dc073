//! Jasper AST - resolved declaration tree consumed by the generator
//!
//! This crate defines the input boundary of the transpiler: declarations as
//! they arrive from the front end, with names, types and annotations already
//! resolved. The front end itself (parsing, type checking) lives outside this
//! repository.

mod decl;
mod expr;
mod registry;

pub use decl::*;
pub use expr::*;
pub use registry::*;
