//! Overload-resolved method lowering
//!
//! The target language has no static dispatch, so a group of same-named
//! methods collapses into a single function. Exactly one member of the group
//! may carry a body, and that member must have the most generic signature of
//! the group; every call that any sibling signature accepts must be valid
//! for the emitted implementation. Signature-only members produce nothing.

use crate::names::is_reserved;
use crate::{Contributor, Fragments, GenError, GenerationContext, Node, Visitor};
use jasper_ast::{MethodDecl, Stmt, TypeRef, TypeRegistry};
use jasper_graph::DependencyKind;
use jasper_js::{assignment, name, statement, JsNode, CONSTRUCTOR, PROTOTYPE};

/// Synthetic parameter capturing all arguments of a variadic implementation
const ARGUMENTS_PARAM: &str = "_arguments";

pub struct OverloadWriter;

impl Contributor for OverloadWriter {
    fn contribute(
        &self,
        visitor: &Visitor,
        node: Node<'_>,
        cx: &mut GenerationContext<'_>,
        mut prev: Fragments,
    ) -> Result<Fragments, GenError> {
        let Node::Method(method) = node else {
            return Ok(prev);
        };

        // parameter types are dependencies even for signature-only members
        for param in &method.params {
            if let TypeRef::Named(ty) = &param.ty {
                cx.record_dependency(ty, DependencyKind::Other);
            }
        }

        if method.body.is_none() {
            return Ok(prev);
        }

        let group: Vec<&MethodDecl> = cx
            .decl()
            .methods()
            .filter(|m| m.name == method.name)
            .collect();

        if group.iter().filter(|m| m.body.is_some()).count() > 1 {
            return Err(GenError::AmbiguousOverload {
                unit: cx.unit_name().to_string(),
                method: method.name.clone(),
            });
        }
        for sibling in &group {
            if !at_least_as_generic(method, sibling, cx.registry()) {
                return Err(GenError::NotMostGeneric {
                    unit: cx.unit_name().to_string(),
                    method: method.name.clone(),
                });
            }
        }

        let params = if method.varargs {
            vec![ARGUMENTS_PARAM.to_string()]
        } else {
            method
                .params
                .iter()
                .map(|p| {
                    if is_reserved(&p.name) {
                        return Err(GenError::ReservedParameterName {
                            unit: cx.unit_name().to_string(),
                            name: p.name.clone(),
                        });
                    }
                    Ok(p.name.clone())
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut body = Vec::new();
        if let Some(block) = &method.body {
            for stmt in &block.statements {
                match stmt {
                    Stmt::Expr(expr) => body.push(statement(visitor.scan_expr(expr, cx)?)),
                    Stmt::Return(value) => {
                        let value = match value {
                            Some(expr) => Some(Box::new(visitor.scan_expr(expr, cx)?)),
                            None => None,
                        };
                        body.push(JsNode::Return(value));
                    }
                }
            }
        }

        let target = name(if method.is_static { CONSTRUCTOR } else { PROTOTYPE });
        let function = JsNode::Function {
            name: None,
            params,
            body,
        };
        prev.push(statement(assignment(
            target,
            cx.names().method_name(method),
            function,
        )));
        Ok(prev)
    }
}

/// Whether `implementation` accepts every call any `other` signature in the
/// group accepts
fn at_least_as_generic(
    implementation: &MethodDecl,
    other: &MethodDecl,
    registry: &TypeRegistry,
) -> bool {
    if implementation.varargs {
        return true;
    }
    if other.varargs {
        return false;
    }
    if implementation.params.len() < other.params.len() {
        return false;
    }
    implementation
        .params
        .iter()
        .zip(&other.params)
        .all(|(wide, narrow)| assignable(&wide.ty, &narrow.ty, registry))
}

/// Whether a value of type `narrow` is acceptable where `wide` is declared
fn assignable(wide: &TypeRef, narrow: &TypeRef, registry: &TypeRegistry) -> bool {
    match (wide, narrow) {
        (TypeRef::Root, _) => true,
        (_, TypeRef::Root) => false,
        (TypeRef::Named(w), TypeRef::Named(n)) => w == n || registry.is_ancestor_of(w, n),
    }
}
