//! Mapping resolved symbols to their JavaScript names

use jasper_ast::{MethodDecl, TypeRegistry};

/// Words that cannot appear as generated identifiers (parameter names in
/// particular); the front end allows them because they are legal in the
/// source language.
const RESERVED: &[&str] = &[
    "arguments", "break", "case", "catch", "const", "continue", "default", "delete", "do", "else",
    "finally", "for", "function", "if", "in", "instanceof", "new", "prototype", "return", "switch",
    "this", "throw", "try", "typeof", "var", "void", "while", "with",
];

/// Whether a source identifier collides with a JavaScript reserved word
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Maps resolved type/method/variable symbols to target-language names
pub trait JsNameProvider {
    /// Fully qualified dotted target name for a declared type.
    ///
    /// # Panics
    ///
    /// Panics when `qualified_name` does not name a declarable type in the
    /// registry; that is a caller bug, not input to recover from.
    fn type_name(&self, registry: &TypeRegistry, qualified_name: &str) -> String;

    /// Target method name; overload disambiguation is structural, so this is
    /// the verbatim source name
    fn method_name(&self, method: &MethodDecl) -> String {
        method.name.clone()
    }

    /// Target variable name, verbatim
    fn variable_name(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Default naming rules: innermost simple name, enclosing simple names
/// prepended iteratively, then the outermost declaration's namespace when
/// one resolves non-empty.
#[derive(Debug, Default)]
pub struct DefaultJsNameProvider;

impl JsNameProvider for DefaultJsNameProvider {
    fn type_name(&self, registry: &TypeRegistry, qualified_name: &str) -> String {
        let Some(decl) = registry.get(qualified_name) else {
            panic!("don't know how to name this type: {qualified_name}");
        };

        let mut name = decl.simple_name.clone();
        let mut root = decl;
        while let Some(enclosing) = root.enclosing.as_deref() {
            let Some(outer) = registry.get(enclosing) else {
                panic!("don't know how to name this type: {enclosing}");
            };
            name = format!("{}.{}", outer.simple_name, name);
            root = outer;
        }

        match registry.resolve_namespace(root) {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, name),
            _ => name,
        }
    }
}
