//! Search conditions with independently optional criteria.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A set of optional search criteria for member lookups.
///
/// Every field may be absent; absence means "no constraint", never "match
/// nothing". Blank strings are treated as absent by the fragment builders,
/// so callers can pass through free-text form input unfiltered.
///
/// If both age bounds are present, keeping `age_goe <= age_loe` is the
/// caller's responsibility; an inverted range simply matches nothing.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize,
)]
pub struct SearchCondition {
    /// Exact-match filter on the member name.
    pub name: Option<String>,
    /// Exact-match filter on the owning group's name.
    pub group_name: Option<String>,
    /// Inclusive lower bound on the member age.
    pub age_goe: Option<i32>,
    /// Inclusive upper bound on the member age.
    pub age_loe: Option<i32>,
}

impl SearchCondition {
    /// Create a condition with no criteria (matches every member).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member-name filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the group-name filter.
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Set the inclusive lower age bound.
    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Set the inclusive upper age bound.
    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Check whether no criterion is set at all.
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.group_name.is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}
