//! Embedded markup (JSX) syntax extension
//!
//! Registered on the method chain when the extension is enabled. The payload
//! is carried verbatim on an opaque node that never participates in
//! traversal and serializes to the fixed `[JSX]` placeholder. A method
//! without a payload still yields a well-formed default fragment, so callers
//! never have to special-case its absence.

use crate::{Contributor, Fragments, GenError, GenerationContext, Node, Visitor};
use jasper_js::{JsNode, JsxNode};

/// Default payload emitted when no markup annotation is attached
const EMPTY_PAYLOAD: &str = "<div>[empty]</div>";

pub struct JsxWriter;

impl Contributor for JsxWriter {
    fn contribute(
        &self,
        _visitor: &Visitor,
        node: Node<'_>,
        _cx: &mut GenerationContext<'_>,
        mut prev: Fragments,
    ) -> Result<Fragments, GenError> {
        let Node::Method(method) = node else {
            return Ok(prev);
        };

        let payload = method.doc.as_deref().unwrap_or(EMPTY_PAYLOAD);
        prev.push(JsNode::Jsx(JsxNode::new(payload)));
        Ok(prev)
    }
}
