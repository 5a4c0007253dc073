//! JavaScript AST nodes and construction helpers

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A JavaScript AST fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsNode {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),

    /// A bare identifier
    Name(String),

    /// Member access: `target.field`
    Member { target: Box<JsNode>, field: String },

    /// Member assignment: `target.field = value`
    Assign {
        target: Box<JsNode>,
        field: String,
        value: Box<JsNode>,
    },

    /// Expression statement: `expr;`
    Statement(Box<JsNode>),

    /// Function expression or declaration
    Function {
        name: Option<String>,
        params: Vec<String>,
        body: Vec<JsNode>,
    },

    Return(Option<Box<JsNode>>),

    /// Function call: `callee(args)`
    Call { callee: Box<JsNode>, args: Vec<JsNode> },

    /// Constructor call: `new callee(args)`
    New { callee: Box<JsNode>, args: Vec<JsNode> },

    /// Opaque syntax-extension node; the payload never participates in
    /// traversal and renders as a fixed placeholder
    Jsx(JsxNode),
}

/// Embedded markup payload, held verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsxNode {
    payload: String,
}

impl JsxNode {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }

    /// The raw extension payload, exactly as attached to the source
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// `target` name for per-instance members
pub const PROTOTYPE: &str = "prototype";
/// `target` name for static members
pub const CONSTRUCTOR: &str = "constructor";

/// Build a `Name` node
pub fn name(n: impl Into<String>) -> JsNode {
    JsNode::Name(n.into())
}

/// Build a member assignment: `target.field = value`
pub fn assignment(target: JsNode, field: impl Into<String>, value: JsNode) -> JsNode {
    JsNode::Assign {
        target: Box::new(target),
        field: field.into(),
        value: Box::new(value),
    }
}

/// Wrap an expression into a statement
pub fn statement(expr: JsNode) -> JsNode {
    JsNode::Statement(Box::new(expr))
}

/// Member access: `target.field`
pub fn member(target: JsNode, field: impl Into<String>) -> JsNode {
    JsNode::Member {
        target: Box::new(target),
        field: field.into(),
    }
}

impl JsNode {
    /// Compact single-line rendering, without any formatting niceties
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            JsNode::Null => out.push_str("null"),
            JsNode::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            JsNode::Number(n) => {
                // integers are only exact within 2^53; beyond that the cast
                // would saturate
                if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                    let _ = write!(out, "{}", *n as i64);
                } else {
                    let _ = write!(out, "{}", n);
                }
            }
            JsNode::Str(s) => {
                let _ = write!(out, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""));
            }
            JsNode::Name(n) => out.push_str(n),
            JsNode::Member { target, field } => {
                target.write(out);
                out.push('.');
                out.push_str(field);
            }
            JsNode::Assign { target, field, value } => {
                target.write(out);
                out.push('.');
                out.push_str(field);
                out.push('=');
                value.write(out);
            }
            JsNode::Statement(expr) => {
                expr.write(out);
                out.push(';');
            }
            JsNode::Function { name, params, body } => {
                out.push_str("function");
                if let Some(n) = name {
                    out.push(' ');
                    out.push_str(n);
                }
                out.push('(');
                out.push_str(&params.join(", "));
                out.push_str("){");
                for stmt in body {
                    stmt.write(out);
                }
                out.push('}');
            }
            JsNode::Return(value) => {
                out.push_str("return");
                if let Some(v) = value {
                    out.push(' ');
                    v.write(out);
                }
            }
            JsNode::Call { callee, args } => {
                callee.write(out);
                out.push('(');
                Self::write_list(args, out);
                out.push(')');
            }
            JsNode::New { callee, args } => {
                out.push_str("new ");
                callee.write(out);
                out.push('(');
                Self::write_list(args, out);
                out.push(')');
            }
            JsNode::Jsx(_) => out.push_str("[JSX]"),
        }
    }

    fn write_list(nodes: &[JsNode], out: &mut String) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            node.write(out);
        }
    }
}
