//! Predicate fragments and the composite filter IR.
//!
//! A [`Predicate`] is one boolean condition tied to a single column or to the
//! joined group relation. A [`CompositeFilter`] is the conjunction of the
//! fragments that were actually present for one search call. An empty
//! composite is the always-true filter.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One boolean condition derived from a single search criterion.
#[derive(
    Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize,
)]
pub enum Predicate {
    /// Member name equals the given value.
    NameEq(String),
    /// The owning group's name equals the given value.
    GroupNameEq(String),
    /// Member age is greater than or equal to the bound (inclusive).
    AgeGoe(i32),
    /// Member age is less than or equal to the bound (inclusive).
    AgeLoe(i32),
}

impl Predicate {
    /// Whether evaluating this predicate requires the joined group.
    pub fn references_group(&self) -> bool {
        matches!(self, Predicate::GroupNameEq(_))
    }
}

/// The conjunction of all active fragments for one search call.
///
/// Immutable once composed. Fragment order never affects the result set
/// (conjunction is commutative); it is kept only for readable query logs.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize,
)]
pub struct CompositeFilter {
    predicates: Vec<Predicate>,
}

impl CompositeFilter {
    /// The always-true filter (matches every row).
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Build a composite from already-collected fragments.
    pub fn from_predicates(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// AND one more fragment onto the composite.
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Whether this composite matches every row.
    pub fn is_match_all(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Number of active fragments.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether there are no active fragments.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether any fragment requires the joined group to evaluate.
    ///
    /// The count path uses this to drop the group lookup when the filter
    /// only touches member columns: the left join never changes member
    /// cardinality, so it matters to counting only when filtered on.
    pub fn references_group(&self) -> bool {
        self.predicates.iter().any(Predicate::references_group)
    }

    /// Iterate over the active fragments.
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }
}
