//! Contributor-chain dispatch engine
//!
//! Node kinds form a closed sum type; each kind has an explicit ordered list
//! of contributors. Scanning a node folds the chain: every contributor gets
//! the fragments accumulated so far and returns the sequence to pass on.

use crate::{GenError, GenerationContext};
use jasper_ast::{Expr, FieldDecl, MethodDecl};
use jasper_js::JsNode;

/// Accumulated target AST fragments for one node
pub type Fragments = Vec<JsNode>;

/// A node the dispatch engine can visit
#[derive(Clone, Copy)]
pub enum Node<'t> {
    Field(&'t FieldDecl),
    Method(&'t MethodDecl),
    Expr(&'t Expr),
}

/// A handler in the chain for one node kind.
///
/// Contributors receive the shared visitor (to recurse into sub-nodes they
/// own), the generation context, and the fragments produced so far; they
/// return the extended or replaced sequence. Raising an error aborts
/// generation of the owning unit only.
pub trait Contributor {
    fn contribute(
        &self,
        visitor: &Visitor,
        node: Node<'_>,
        cx: &mut GenerationContext<'_>,
        prev: Fragments,
    ) -> Result<Fragments, GenError>;
}

/// Dispatch table: one ordered contributor chain per node kind
#[derive(Default)]
pub struct Visitor {
    field: Vec<Box<dyn Contributor>>,
    method: Vec<Box<dyn Contributor>>,
    expr: Vec<Box<dyn Contributor>>,
}

impl Visitor {
    /// An engine with no contributors registered
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard lowering chains: fields, overload-resolved methods, and
    /// expressions. Syntax extensions register on top of these.
    pub fn with_defaults() -> Self {
        let mut visitor = Self::new();
        visitor.register_field(Box::new(crate::writers::FieldWriter));
        visitor.register_method(Box::new(crate::writers::OverloadWriter));
        visitor.register_expr(Box::new(crate::writers::ExprWriter));
        visitor
    }

    pub fn register_field(&mut self, contributor: Box<dyn Contributor>) {
        self.field.push(contributor);
    }

    pub fn register_method(&mut self, contributor: Box<dyn Contributor>) {
        self.method.push(contributor);
    }

    pub fn register_expr(&mut self, contributor: Box<dyn Contributor>) {
        self.expr.push(contributor);
    }

    /// Run the contributor chain registered for this node's kind, in
    /// registration order
    pub fn scan(
        &self,
        node: Node<'_>,
        cx: &mut GenerationContext<'_>,
    ) -> Result<Fragments, GenError> {
        let chain = match node {
            Node::Field(_) => &self.field,
            Node::Method(_) => &self.method,
            Node::Expr(_) => &self.expr,
        };
        let mut acc = Fragments::new();
        for contributor in chain {
            acc = contributor.contribute(self, node, cx, acc)?;
        }
        Ok(acc)
    }

    /// Scan an expression and take its single lowered fragment
    pub fn scan_expr(
        &self,
        expr: &Expr,
        cx: &mut GenerationContext<'_>,
    ) -> Result<JsNode, GenError> {
        let mut fragments = self.scan(Node::Expr(expr), cx)?;
        if fragments.is_empty() {
            return Err(GenError::MissingFragment {
                unit: cx.unit_name().to_string(),
            });
        }
        Ok(fragments.remove(0))
    }
}
