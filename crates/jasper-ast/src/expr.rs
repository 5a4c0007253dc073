//! Expression and statement nodes
//!
//! A deliberately small, fully resolved expression set: enough to lower
//! field initializers and method bodies. Static accesses carry the target
//! type's qualified name so the generator can classify the dependency
//! without re-running resolution.

use serde::{Deserialize, Serialize};

/// A resolved expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expr {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),

    /// A local variable or parameter reference
    Ident(String),

    /// Instance field access: `target.field`
    FieldAccess { target: Box<Expr>, field: String },

    /// Static field access: `Type.field`
    StaticField { type_name: String, field: String },

    /// Instance method invocation: `target.method(args)`
    Call {
        target: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// Static method invocation: `Type.method(args)`
    StaticCall {
        type_name: String,
        method: String,
        args: Vec<Expr>,
    },

    /// Constructor invocation: `new Type(args)`
    New { type_name: String, args: Vec<Expr> },
}

/// A statement inside a method body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stmt {
    Expr(Expr),
    Return(Option<Expr>),
}

/// A method body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}
