//! Jasper JS - target JavaScript AST fragments
//!
//! Contributors produce sequences of these nodes; a full pretty-printer is
//! the serializer's job downstream. The compact `to_source` rendering here
//! exists for tests and debugging output, and to give the opaque JSX node
//! its fixed placeholder form.

mod node;

pub use node::*;
