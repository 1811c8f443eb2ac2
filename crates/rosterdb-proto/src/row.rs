//! The projected row returned to callers.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A flat projection of one member and its owning group.
///
/// Group fields are `None` for members without a group; the executor's left
/// join keeps those members in the result set. This is a value with no
/// lifetime beyond the call, not an entity reference.
#[derive(
    Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize,
)]
pub struct MemberGroupRow {
    /// Member id.
    pub member_id: u64,
    /// Member name.
    pub name: String,
    /// Member age.
    pub age: i32,
    /// Owning group id, if the member belongs to one.
    pub group_id: Option<u64>,
    /// Owning group name, if the member belongs to one.
    pub group_name: Option<String>,
}

impl MemberGroupRow {
    /// Build a row for a member with no owning group.
    pub fn ungrouped(member_id: u64, name: impl Into<String>, age: i32) -> Self {
        Self {
            member_id,
            name: name.into(),
            age,
            group_id: None,
            group_name: None,
        }
    }

    /// Build a row for a member with its owning group fields.
    pub fn grouped(
        member_id: u64,
        name: impl Into<String>,
        age: i32,
        group_id: u64,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            name: name.into(),
            age,
            group_id: Some(group_id),
            group_name: Some(group_name.into()),
        }
    }
}
