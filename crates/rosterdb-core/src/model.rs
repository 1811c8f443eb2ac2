//! Entity types held by the store collaborator.

/// A member record. Primary entity of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member id; storage keys are the big-endian encoding, so ascending
    /// scans return members in id order.
    pub id: u64,
    /// Member name.
    pub name: String,
    /// Member age.
    pub age: i32,
    /// Owning group id, if any.
    pub group_id: Option<u64>,
}

impl Member {
    /// Create a member without a group.
    pub fn new(id: u64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            group_id: None,
        }
    }

    /// Create a member owned by a group.
    pub fn in_group(id: u64, name: impl Into<String>, age: i32, group_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            group_id: Some(group_id),
        }
    }
}

/// A group record. One group owns many members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group id.
    pub id: u64,
    /// Group name.
    pub name: String,
}

impl Group {
    /// Create a group.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
