//! Predicate fragment builders and the composer.
//!
//! Each builder maps one optional search criterion to an optional fragment.
//! Absent criteria yield `None`, so the composer can fold the present ones
//! into a conjunction without ever producing a malformed filter. Strings are
//! treated as absent when blank (empty or whitespace-only), mirroring the
//! "blank means unset" convention for free-text search fields.
//!
//! All builders are pure; no I/O happens until the composed filter reaches
//! the store.

use rosterdb_proto::{CompositeFilter, Predicate, SearchCondition};
use tracing::debug;

/// Exact-match fragment on the member name, if present and non-blank.
pub fn name_eq(name: Option<&str>) -> Option<Predicate> {
    non_blank(name).map(|n| Predicate::NameEq(n.to_string()))
}

/// Exact-match fragment on the owning group's name, if present and non-blank.
pub fn group_name_eq(group_name: Option<&str>) -> Option<Predicate> {
    non_blank(group_name).map(|n| Predicate::GroupNameEq(n.to_string()))
}

/// Inclusive lower-bound fragment on the member age, if present.
pub fn age_goe(age: Option<i32>) -> Option<Predicate> {
    age.map(Predicate::AgeGoe)
}

/// Inclusive upper-bound fragment on the member age, if present.
pub fn age_loe(age: Option<i32>) -> Option<Predicate> {
    age.map(Predicate::AgeLoe)
}

/// Compose the active fragments of a condition into one conjunctive filter.
///
/// Invokes every builder, keeps the `Some`s, and ANDs them. A condition with
/// no active criteria composes to the always-true filter. Fragment order
/// follows the condition's field order but carries no semantic weight.
pub fn compose(condition: &SearchCondition) -> CompositeFilter {
    let predicates: Vec<Predicate> = [
        name_eq(condition.name.as_deref()),
        group_name_eq(condition.group_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .collect();

    let filter = CompositeFilter::from_predicates(predicates);
    debug!(fragments = filter.len(), "composed search filter");
    filter
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
