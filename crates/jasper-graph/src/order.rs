//! Emission ordering between units
//!
//! The target runtime builds prototype chains at load time, so a supertype's
//! code must be emitted before any of its subtypes. Nothing else constrains
//! the order: unrelated types compare equal and a *stable* sort keeps them
//! in input order run-to-run. The comparator only looks at subtype edges;
//! Static and Other edges are recorded on descriptors for tooling and never
//! participate here.

use jasper_ast::TypeRegistry;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OrderingError {
    /// Input-contract violation: the caller passed something that is not a
    /// declarable type reference
    #[error("not a declarable type reference: {name}")]
    NotDeclarable { name: String },
}

/// Three-way comparator over declaration handles, by subtype ancestry
pub struct SubtypeComparator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> SubtypeComparator<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Compare two declarations for emission order.
    ///
    /// `Less` when `a` is a transitive supertype of `b`, `Greater` for the
    /// symmetric case, `Equal` for the same declaration and for unrelated
    /// declarations.
    ///
    /// # Panics
    ///
    /// Panics when either argument does not name a declarable type in the
    /// registry. That is a caller bug, not a recoverable condition; use
    /// [`try_compare`](Self::try_compare) to surface it as an error instead.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.try_compare(a, b) {
            Ok(ordering) => ordering,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`compare`](Self::compare)
    pub fn try_compare(&self, a: &str, b: &str) -> Result<Ordering, OrderingError> {
        if !self.registry.contains(a) {
            return Err(OrderingError::NotDeclarable { name: a.to_string() });
        }
        if !self.registry.contains(b) {
            return Err(OrderingError::NotDeclarable { name: b.to_string() });
        }
        if a == b {
            return Ok(Ordering::Equal);
        }
        if self.registry.is_ancestor_of(a, b) {
            return Ok(Ordering::Less);
        }
        if self.registry.is_ancestor_of(b, a) {
            return Ok(Ordering::Greater);
        }
        Ok(Ordering::Equal)
    }
}

/// Stable-sort unit names into emission order.
///
/// Stability matters: unrelated units compare equal, and their relative
/// input order must survive so bundles serialize deterministically.
pub fn sort_for_emission(registry: &TypeRegistry, names: &mut [String]) {
    let comparator = SubtypeComparator::new(registry);
    names.sort_by(|a, b| comparator.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use jasper_ast::TypeDecl;

    fn registry() -> TypeRegistry {
        // base.A <- mid.B <- leaf.C, with x.D and x.E unrelated siblings of A
        let mut reg = TypeRegistry::new();
        reg.insert(TypeDecl::new("base.A"));
        let mut b = TypeDecl::new("mid.B");
        b.superclass = Some("base.A".into());
        reg.insert(b);
        let mut c = TypeDecl::new("leaf.C");
        c.superclass = Some("mid.B".into());
        reg.insert(c);
        let mut d = TypeDecl::new("x.D");
        d.superclass = Some("base.A".into());
        reg.insert(d);
        let mut e = TypeDecl::new("x.E");
        e.superclass = Some("base.A".into());
        reg.insert(e);
        reg
    }

    #[test]
    fn test_direct_supertype_precedes() {
        let reg = registry();
        let cmp = SubtypeComparator::new(&reg);
        assert_eq!(cmp.compare("base.A", "mid.B"), Ordering::Less);
        assert_eq!(cmp.compare("mid.B", "base.A"), Ordering::Greater);
    }

    #[test]
    fn test_transitive_supertype_precedes() {
        let reg = registry();
        let cmp = SubtypeComparator::new(&reg);
        assert_eq!(cmp.compare("base.A", "leaf.C"), Ordering::Less);
        assert_eq!(cmp.compare("leaf.C", "base.A"), Ordering::Greater);
    }

    #[test]
    fn test_unrelated_siblings_are_equal() {
        let reg = registry();
        let cmp = SubtypeComparator::new(&reg);
        assert_eq!(cmp.compare("x.D", "x.E"), Ordering::Equal);
        assert_eq!(cmp.compare("x.E", "x.D"), Ordering::Equal);
    }

    #[test]
    fn test_same_declaration_is_equal() {
        let reg = registry();
        let cmp = SubtypeComparator::new(&reg);
        assert_eq!(cmp.compare("mid.B", "mid.B"), Ordering::Equal);
    }

    #[test]
    #[should_panic(expected = "not a declarable type reference")]
    fn test_undeclarable_reference_panics() {
        let reg = registry();
        SubtypeComparator::new(&reg).compare("no.Such", "base.A");
    }

    #[test]
    fn test_try_compare_reports_bad_input() {
        let reg = registry();
        let cmp = SubtypeComparator::new(&reg);
        assert!(matches!(
            cmp.try_compare("base.A", "no.Such"),
            Err(OrderingError::NotDeclarable { .. })
        ));
    }

    #[test]
    fn test_sort_puts_supertype_first() {
        let reg = registry();
        let mut names: Vec<String> = vec!["mid.B".into(), "base.A".into()];
        sort_for_emission(&reg, &mut names);
        assert_eq!(names, vec!["base.A".to_string(), "mid.B".to_string()]);
    }

    #[test]
    fn test_sort_is_stable_for_unrelated_units() {
        let reg = registry();
        let mut names: Vec<String> = vec!["x.E".into(), "x.D".into(), "base.A".into()];
        sort_for_emission(&reg, &mut names);

        let pos = |n: &str| names.iter().position(|x| x == n).unwrap();
        assert!(pos("base.A") < pos("x.E"));
        assert!(pos("base.A") < pos("x.D"));
        // unrelated siblings keep their input order
        assert!(pos("x.E") < pos("x.D"));
    }
}
