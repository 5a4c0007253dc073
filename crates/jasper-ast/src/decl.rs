//! Declaration nodes (types, fields, methods)

use serde::{Deserialize, Serialize};
use crate::{Block, Expr};

/// A resolved type declaration (class or interface)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully qualified source name, e.g. "com.example.Widget"
    pub qualified_name: String,

    /// Innermost unqualified identifier, e.g. "Widget"
    pub simple_name: String,

    /// Namespace annotation declared directly on this type, if any
    pub namespace: Option<String>,

    /// Qualified name of the enclosing declaration for nested types
    pub enclosing: Option<String>,

    /// Qualified name of the superclass, if any
    pub superclass: Option<String>,

    /// Qualified names of implemented interfaces
    pub interfaces: Vec<String>,

    /// Present when this declaration is a bridge to pre-existing
    /// JavaScript files rather than a body to generate
    pub bridge: Option<BridgeDecl>,

    pub members: Vec<Member>,
}

impl TypeDecl {
    /// Create an empty declaration; the simple name is the last dotted segment
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&qualified_name)
            .to_string();
        Self {
            qualified_name,
            simple_name,
            namespace: None,
            enclosing: None,
            superclass: None,
            interfaces: Vec::new(),
            bridge: None,
            members: Vec::new(),
        }
    }

    /// Whether this declaration maps to pre-authored JavaScript
    pub fn is_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// All field members, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    /// All method members, in declaration order
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(m) => Some(m),
            _ => None,
        })
    }
}

/// External-source annotation payload for bridge declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeDecl {
    /// Pre-authored JavaScript file references, in declaration order
    pub sources: Vec<String>,
}

/// A member of a type declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
}

/// A field declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub is_static: bool,
    pub initializer: Option<Expr>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            initializer: None,
        }
    }
}

/// A method declaration; `body` is `None` for signature-only members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub is_static: bool,
    pub params: Vec<Param>,
    pub varargs: bool,
    pub body: Option<Block>,
    /// Attached documentation text; may carry a syntax-extension payload
    pub doc: Option<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            params: Vec::new(),
            varargs: false,
            body: None,
            doc: None,
        }
    }
}

/// A method parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self { name: name.into(), ty }
    }
}

/// A resolved reference to a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// The universal supertype (`Object`); widest possible parameter type
    Root,
    /// A declared type, by qualified name
    Named(String),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }
}
