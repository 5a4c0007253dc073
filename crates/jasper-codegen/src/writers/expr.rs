//! Expression lowering
//!
//! Besides producing fragments, this is where most dependency discovery
//! happens: static accesses and constructor calls record `Static` edges on
//! the unit under construction as they are lowered.

use crate::{Contributor, Fragments, GenError, GenerationContext, Node, Visitor};
use jasper_ast::Expr;
use jasper_graph::DependencyKind;
use jasper_js::{member, name, JsNode};

pub struct ExprWriter;

impl Contributor for ExprWriter {
    fn contribute(
        &self,
        visitor: &Visitor,
        node: Node<'_>,
        cx: &mut GenerationContext<'_>,
        mut prev: Fragments,
    ) -> Result<Fragments, GenError> {
        let Node::Expr(expr) = node else {
            return Ok(prev);
        };
        let lowered = self.lower(visitor, expr, cx)?;
        prev.push(lowered);
        Ok(prev)
    }
}

impl ExprWriter {
    fn lower(
        &self,
        visitor: &Visitor,
        expr: &Expr,
        cx: &mut GenerationContext<'_>,
    ) -> Result<JsNode, GenError> {
        Ok(match expr {
            Expr::Null => JsNode::Null,
            Expr::Bool(b) => JsNode::Bool(*b),
            Expr::Number(n) => JsNode::Number(*n),
            Expr::Str(s) => JsNode::Str(s.clone()),
            Expr::Ident(n) => name(cx.names().variable_name(n)),
            Expr::FieldAccess { target, field } => {
                let target = visitor.scan_expr(target, cx)?;
                member(target, field.clone())
            }
            Expr::StaticField { type_name, field } => {
                cx.record_dependency(type_name, DependencyKind::Static);
                member(name(cx.type_name(type_name)), field.clone())
            }
            Expr::Call { target, method, args } => {
                let target = visitor.scan_expr(target, cx)?;
                JsNode::Call {
                    callee: Box::new(member(target, method.clone())),
                    args: self.lower_args(visitor, args, cx)?,
                }
            }
            Expr::StaticCall { type_name, method, args } => {
                cx.record_dependency(type_name, DependencyKind::Static);
                JsNode::Call {
                    callee: Box::new(member(name(cx.type_name(type_name)), method.clone())),
                    args: self.lower_args(visitor, args, cx)?,
                }
            }
            Expr::New { type_name, args } => {
                cx.record_dependency(type_name, DependencyKind::Static);
                JsNode::New {
                    callee: Box::new(name(cx.type_name(type_name))),
                    args: self.lower_args(visitor, args, cx)?,
                }
            }
        })
    }

    fn lower_args(
        &self,
        visitor: &Visitor,
        args: &[Expr],
        cx: &mut GenerationContext<'_>,
    ) -> Result<Vec<JsNode>, GenError> {
        args.iter().map(|arg| visitor.scan_expr(arg, cx)).collect()
    }
}
