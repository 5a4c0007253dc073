//! Jasper Graph - dependency kinds and cross-unit emission ordering
//!
//! The dependency graph has no stored structure of its own: it is the union
//! of every unit descriptor's dependency map. This crate owns the pieces that
//! give that implicit graph meaning: the `DependencyKind` classification with
//! its persistence prefixes, and the subtype comparator that decides emission
//! order between units.

mod kind;
mod order;

pub use kind::DependencyKind;
pub use order::{sort_for_emission, OrderingError, SubtypeComparator};
