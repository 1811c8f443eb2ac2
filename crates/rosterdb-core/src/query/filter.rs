//! Composite filter evaluation against stored entities.

use rosterdb_proto::{CompositeFilter, Predicate};

use crate::model::Member;

/// Evaluates composite filters against member rows.
///
/// Evaluation is split so the store can defer the group lookup: a row matches
/// iff [`matches_scalar`](Self::matches_scalar) passes on the member's own
/// columns and [`matches_group`](Self::matches_group) passes on the joined
/// group name. When a filter does not reference the group at all, the second
/// check is vacuously true and the lookup can be skipped entirely.
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Evaluate the fragments that touch only member columns.
    pub fn matches_scalar(filter: &CompositeFilter, member: &Member) -> bool {
        filter.predicates().all(|predicate| match predicate {
            Predicate::NameEq(name) => member.name == *name,
            Predicate::AgeGoe(bound) => member.age >= *bound,
            Predicate::AgeLoe(bound) => member.age <= *bound,
            Predicate::GroupNameEq(_) => true,
        })
    }

    /// Evaluate the fragments that reference the joined group.
    ///
    /// `group_name` is the left-joined group name: `None` for a member with
    /// no group (or a dangling group id), which never matches an equality
    /// fragment.
    pub fn matches_group(filter: &CompositeFilter, group_name: Option<&str>) -> bool {
        filter.predicates().all(|predicate| match predicate {
            Predicate::GroupNameEq(name) => group_name == Some(name.as_str()),
            _ => true,
        })
    }

    /// Evaluate the whole filter against a member and its joined group name.
    pub fn matches(filter: &CompositeFilter, member: &Member, group_name: Option<&str>) -> bool {
        Self::matches_scalar(filter, member) && Self::matches_group(filter, group_name)
    }
}
