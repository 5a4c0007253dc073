//! Per-unit generation driver

use crate::{Fragments, GenError, GenerationContext, JsNameProvider, Node, Visitor};
use jasper_ast::{Member, TypeDecl, TypeRegistry};
use jasper_graph::DependencyKind;
use jasper_meta::{GeneratedUnit, MetadataStore, UnitKey};
use log::debug;

/// Everything one unit generation produces: the frozen descriptor and the
/// target AST fragments handed to the serializer
pub struct GeneratedOutput {
    pub unit: GeneratedUnit,
    pub fragments: Fragments,
}

/// Generate one unit: walk its members through the contributor chains,
/// collect dependencies, resolve the namespace, and persist the metadata
/// record when a store is given.
///
/// The caller must not pass a bridge declaration; bridges have no body to
/// generate and are described by [`jasper_meta::BridgeUnit`] instead.
pub fn generate_unit(
    decl: &TypeDecl,
    registry: &TypeRegistry,
    visitor: &Visitor,
    names: &dyn JsNameProvider,
    store: Option<&MetadataStore>,
) -> Result<GeneratedOutput, GenError> {
    if decl.is_bridge() {
        return Err(GenError::BridgeUnit {
            unit: decl.qualified_name.clone(),
        });
    }
    debug!("generating {}", decl.qualified_name);

    let mut cx = GenerationContext::new(decl, registry, names);

    // prototype-chain edges first: they alone govern emission order
    if let Some(superclass) = &decl.superclass {
        cx.record_dependency(superclass, DependencyKind::Extends);
    }
    for interface in &decl.interfaces {
        cx.record_dependency(interface, DependencyKind::Extends);
    }

    let mut fragments = Fragments::new();
    for member in &decl.members {
        let node = match member {
            Member::Field(field) => Node::Field(field),
            Member::Method(method) => Node::Method(method),
        };
        fragments.extend(visitor.scan(node, &mut cx)?);
    }

    if let Some(ns) = registry.resolve_namespace(decl) {
        cx.set_namespace(ns);
    }
    cx.set_js_file(format!("{}.js", decl.qualified_name.replace('.', "/")));

    let unit = cx.finish();
    if let Some(store) = store {
        store.store(&unit).map_err(|e| GenError::Meta {
            unit: decl.qualified_name.clone(),
            source: e,
        })?;
    }

    Ok(GeneratedOutput { unit, fragments })
}

/// Generate a batch of units. Bridge declarations are skipped (they carry no
/// body); each remaining unit succeeds or fails independently, keyed by its
/// identity, so one broken unit never takes the batch down.
pub fn generate_all<'d>(
    decls: impl IntoIterator<Item = &'d TypeDecl>,
    registry: &TypeRegistry,
    visitor: &Visitor,
    names: &dyn JsNameProvider,
    store: Option<&MetadataStore>,
) -> Vec<(UnitKey, Result<GeneratedOutput, GenError>)> {
    decls
        .into_iter()
        .filter(|decl| !decl.is_bridge())
        .map(|decl| {
            let key = UnitKey::new(&decl.qualified_name);
            let result = generate_unit(decl, registry, visitor, names, store);
            (key, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::JsxWriter;
    use crate::DefaultJsNameProvider;
    use jasper_ast::{Block, Expr, FieldDecl, MethodDecl, Param, Stmt, TypeRef};
    use jasper_js::JsNode;
    use jasper_meta::UnitDescriptor;

    fn registry_with(decls: Vec<TypeDecl>) -> TypeRegistry {
        let mut reg = TypeRegistry::new();
        for decl in decls {
            reg.insert(decl);
        }
        reg
    }

    fn generate(decl: &TypeDecl, registry: &TypeRegistry) -> Result<GeneratedOutput, GenError> {
        let visitor = Visitor::with_defaults();
        generate_unit(decl, registry, &visitor, &DefaultJsNameProvider, None)
    }

    fn sources(output: &GeneratedOutput) -> Vec<String> {
        output.fragments.iter().map(|f| f.to_source()).collect()
    }

    #[test]
    fn test_static_field_with_literal_initializer() {
        let mut decl = TypeDecl::new("app.Config");
        let mut field = FieldDecl::new("LIMIT");
        field.is_static = true;
        field.initializer = Some(Expr::Number(10.0));
        decl.members.push(Member::Field(field));
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert_eq!(sources(&output), ["constructor.LIMIT=10;"]);
    }

    #[test]
    fn test_instance_field_without_initializer_gets_null() {
        let mut decl = TypeDecl::new("app.Widget");
        decl.members.push(Member::Field(FieldDecl::new("label")));
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert_eq!(sources(&output), ["prototype.label=null;"]);
    }

    #[test]
    fn test_overload_picks_widest_arity_implementation() {
        let mut decl = TypeDecl::new("app.Overloaded");
        let sig0 = MethodDecl::new("method");
        decl.members.push(Member::Method(sig0));
        let mut sig1 = MethodDecl::new("method");
        sig1.params = vec![Param::new("param1", TypeRef::Root)];
        decl.members.push(Member::Method(sig1));
        let mut imp = MethodDecl::new("method");
        imp.params = vec![
            Param::new("param1", TypeRef::Root),
            Param::new("param2", TypeRef::Root),
        ];
        imp.body = Some(Block::empty());
        decl.members.push(Member::Method(imp));
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert_eq!(sources(&output), ["prototype.method=function(param1, param2){};"]);
    }

    #[test]
    fn test_overload_picks_more_generic_parameter_type() {
        let base = TypeDecl::new("lib.Base");
        let mut derived = TypeDecl::new("lib.Derived");
        derived.superclass = Some("lib.Base".into());

        let mut decl = TypeDecl::new("app.Overloaded");
        let mut sig = MethodDecl::new("method");
        sig.params = vec![Param::new("param1", TypeRef::named("lib.Derived"))];
        decl.members.push(Member::Method(sig));
        let mut imp = MethodDecl::new("method");
        imp.params = vec![Param::new("param1", TypeRef::named("lib.Base"))];
        imp.body = Some(Block::empty());
        decl.members.push(Member::Method(imp));

        let reg = registry_with(vec![base, derived, decl.clone()]);
        let output = generate(&decl, &reg).unwrap();
        assert_eq!(sources(&output), ["prototype.method=function(param1){};"]);
    }

    #[test]
    fn test_overload_less_generic_body_fails() {
        let base = TypeDecl::new("lib.Base");
        let mut derived = TypeDecl::new("lib.Derived");
        derived.superclass = Some("lib.Base".into());

        let mut decl = TypeDecl::new("app.Bad");
        let mut sig = MethodDecl::new("method");
        sig.params = vec![Param::new("param1", TypeRef::named("lib.Base"))];
        decl.members.push(Member::Method(sig));
        let mut imp = MethodDecl::new("method");
        imp.params = vec![Param::new("param1", TypeRef::named("lib.Derived"))];
        imp.body = Some(Block::empty());
        decl.members.push(Member::Method(imp));

        let reg = registry_with(vec![base, derived, decl.clone()]);
        match generate(&decl, &reg) {
            Err(GenError::NotMostGeneric { unit, method }) => {
                assert_eq!(unit, "app.Bad");
                assert_eq!(method, "method");
            }
            other => panic!("expected NotMostGeneric, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_overload_two_bodies_fails() {
        let mut decl = TypeDecl::new("app.Twice");
        for arity in [1usize, 2] {
            let mut m = MethodDecl::new("method");
            m.params = (0..arity)
                .map(|i| Param::new(format!("p{i}"), TypeRef::Root))
                .collect();
            m.body = Some(Block::empty());
            decl.members.push(Member::Method(m));
        }
        let reg = registry_with(vec![decl.clone()]);

        assert!(matches!(
            generate(&decl, &reg),
            Err(GenError::AmbiguousOverload { .. })
        ));
    }

    #[test]
    fn test_signature_only_group_emits_nothing() {
        let mut decl = TypeDecl::new("app.Native");
        let mut sig = MethodDecl::new("method");
        sig.params = vec![Param::new("param1", TypeRef::Root)];
        decl.members.push(Member::Method(sig));
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert!(output.fragments.is_empty());
    }

    #[test]
    fn test_varargs_implementation_captures_arguments() {
        let mut decl = TypeDecl::new("app.Variadic");
        let mut sig = MethodDecl::new("method");
        sig.params = vec![Param::new("param1", TypeRef::Root)];
        decl.members.push(Member::Method(sig));
        let mut imp = MethodDecl::new("method");
        imp.varargs = true;
        imp.body = Some(Block::empty());
        decl.members.push(Member::Method(imp));
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert_eq!(sources(&output), ["prototype.method=function(_arguments){};"]);
    }

    #[test]
    fn test_reserved_parameter_name_fails() {
        let mut decl = TypeDecl::new("app.BadParam");
        let mut m = MethodDecl::new("method");
        m.params = vec![Param::new("var", TypeRef::Root)];
        m.body = Some(Block::empty());
        decl.members.push(Member::Method(m));
        let reg = registry_with(vec![decl.clone()]);

        assert!(matches!(
            generate(&decl, &reg),
            Err(GenError::ReservedParameterName { .. })
        ));
    }

    #[test]
    fn test_dependency_kinds_from_member_bodies() {
        let helper = TypeDecl::new("util.Helper");
        let parent = TypeDecl::new("app.Parent");
        let other = TypeDecl::new("util.Payload");

        let mut decl = TypeDecl::new("app.Child");
        decl.superclass = Some("app.Parent".into());
        let mut field = FieldDecl::new("cache");
        field.initializer = Some(Expr::StaticField {
            type_name: "util.Helper".into(),
            field: "INSTANCE".into(),
        });
        decl.members.push(Member::Field(field));
        let mut m = MethodDecl::new("run");
        m.params = vec![Param::new("payload", TypeRef::named("util.Payload"))];
        m.body = Some(Block::of(vec![Stmt::Expr(Expr::New {
            type_name: "util.Helper".into(),
            args: vec![],
        })]));
        decl.members.push(Member::Method(m));

        let reg = registry_with(vec![helper, parent, other, decl.clone()]);
        let output = generate(&decl, &reg).unwrap();
        let deps = output.unit.dependency_map();

        assert_eq!(
            deps.get(&UnitKey::new("app.Parent")),
            Some(&DependencyKind::Extends)
        );
        assert_eq!(
            deps.get(&UnitKey::new("util.Helper")),
            Some(&DependencyKind::Static)
        );
        assert_eq!(
            deps.get(&UnitKey::new("util.Payload")),
            Some(&DependencyKind::Other)
        );
    }

    #[test]
    fn test_extends_wins_over_weaker_edge_on_same_unit() {
        let parent = TypeDecl::new("app.Parent");
        let mut decl = TypeDecl::new("app.Child");
        decl.superclass = Some("app.Parent".into());
        let mut m = MethodDecl::new("touch");
        m.body = Some(Block::of(vec![Stmt::Expr(Expr::StaticCall {
            type_name: "app.Parent".into(),
            method: "init".into(),
            args: vec![],
        })]));
        decl.members.push(Member::Method(m));

        let reg = registry_with(vec![parent, decl.clone()]);
        let output = generate(&decl, &reg).unwrap();
        assert_eq!(
            output.unit.dependency_map().get(&UnitKey::new("app.Parent")),
            Some(&DependencyKind::Extends)
        );
    }

    #[test]
    fn test_jsx_payload_carried_verbatim() {
        let mut decl = TypeDecl::new("app.View");
        let mut m = MethodDecl::new("render");
        m.doc = Some("<div>OK</div>".into());
        m.body = Some(Block::empty());
        decl.members.push(Member::Method(m));
        let reg = registry_with(vec![decl.clone()]);

        let mut visitor = Visitor::with_defaults();
        visitor.register_method(Box::new(JsxWriter));
        let output =
            generate_unit(&decl, &reg, &visitor, &DefaultJsNameProvider, None).unwrap();

        // base lowering first, extension fragment appended after it
        assert_eq!(output.fragments.len(), 2);
        assert_eq!(output.fragments[0].to_source(), "prototype.render=function(){};");
        assert_eq!(output.fragments[1].to_source(), "[JSX]");
        match &output.fragments[1] {
            JsNode::Jsx(jsx) => assert_eq!(jsx.payload(), "<div>OK</div>"),
            other => panic!("expected Jsx node, got {:?}", other),
        }
    }

    #[test]
    fn test_jsx_without_annotation_yields_default_placeholder() {
        let mut decl = TypeDecl::new("app.View");
        let mut m = MethodDecl::new("render");
        m.body = Some(Block::empty());
        decl.members.push(Member::Method(m));
        let reg = registry_with(vec![decl.clone()]);

        let mut visitor = Visitor::with_defaults();
        visitor.register_method(Box::new(JsxWriter));
        let output =
            generate_unit(&decl, &reg, &visitor, &DefaultJsNameProvider, None).unwrap();

        match output.fragments.last() {
            Some(JsNode::Jsx(jsx)) => assert_eq!(jsx.payload(), "<div>[empty]</div>"),
            other => panic!("expected Jsx node, got {:?}", other),
        }
    }

    #[test]
    fn test_namespace_resolution_reaches_descriptor() {
        let mut decl = TypeDecl::new("app.Widget");
        decl.namespace = Some("ui".into());
        let reg = registry_with(vec![decl.clone()]);

        let output = generate(&decl, &reg).unwrap();
        assert_eq!(output.unit.namespace(), Some("ui"));
        assert_eq!(output.unit.js_class_name(), "ui.Widget");
    }

    #[test]
    fn test_batch_reports_failures_per_unit() {
        let good = TypeDecl::new("app.Good");
        let mut bad = TypeDecl::new("app.Bad");
        for arity in [0usize, 1] {
            let mut m = MethodDecl::new("method");
            m.params = (0..arity)
                .map(|i| Param::new(format!("p{i}"), TypeRef::Root))
                .collect();
            m.body = Some(Block::empty());
            bad.members.push(Member::Method(m));
        }
        let reg = registry_with(vec![good.clone(), bad.clone()]);

        let visitor = Visitor::with_defaults();
        let results = generate_all(
            [&good, &bad],
            &reg,
            &visitor,
            &DefaultJsNameProvider,
            None,
        );
        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        match &results[1].1 {
            Err(e) => assert_eq!(e.unit(), "app.Bad"),
            Ok(_) => panic!("expected app.Bad to fail"),
        }
    }

    #[test]
    fn test_generate_unit_rejects_bridge_declarations() {
        let mut decl = TypeDecl::new("lib.Dom");
        decl.bridge = Some(jasper_ast::BridgeDecl { sources: vec![] });
        let reg = registry_with(vec![decl.clone()]);

        assert!(matches!(
            generate(&decl, &reg),
            Err(GenError::BridgeUnit { .. })
        ));
    }
}
