//! Field declaration lowering

use crate::{Contributor, Fragments, GenError, GenerationContext, Node, Visitor};
use jasper_js::{assignment, name, statement, JsNode, CONSTRUCTOR, PROTOTYPE};

/// Lowers a field to one assignment statement on the declaring type's
/// prototype slot (instance fields) or constructor slot (static fields).
/// A missing initializer becomes an explicit `null`.
pub struct FieldWriter;

impl Contributor for FieldWriter {
    fn contribute(
        &self,
        visitor: &Visitor,
        node: Node<'_>,
        cx: &mut GenerationContext<'_>,
        mut prev: Fragments,
    ) -> Result<Fragments, GenError> {
        let Node::Field(field) = node else {
            return Ok(prev);
        };

        let initializer = match &field.initializer {
            Some(expr) => visitor.scan_expr(expr, cx)?,
            None => JsNode::Null,
        };
        let target = name(if field.is_static { CONSTRUCTOR } else { PROTOTYPE });

        prev.push(statement(assignment(target, &field.name, initializer)));
        Ok(prev)
    }
}
