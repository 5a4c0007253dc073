//! Jasper Codegen - declaration-to-JavaScript lowering
//!
//! The engine walks a resolved declaration and, for each node kind, runs an
//! ordered chain of *contributors*. Each contributor sees what earlier
//! contributors produced for the same node and may extend or replace it, so
//! optional syntax extensions (such as embedded markup) layer on top of the
//! base lowering without touching it. Recursion happens only where a
//! contributor explicitly re-enters the visitor on sub-nodes it owns.
//!
//! A failing contributor aborts generation of its own unit only; a batch
//! reports one typed failure per failing unit and keeps going.

mod context;
mod error;
mod generator;
mod names;
mod visitor;
mod writers;

pub use context::GenerationContext;
pub use error::GenError;
pub use generator::{generate_all, generate_unit, GeneratedOutput};
pub use names::{DefaultJsNameProvider, JsNameProvider};
pub use visitor::{Contributor, Fragments, Node, Visitor};
pub use writers::{ExprWriter, FieldWriter, JsxWriter, OverloadWriter};
