//! Sled-backed store engine.
//!
//! Members and groups live in separate trees keyed by big-endian id, so a
//! plain tree scan yields members in ascending id order, the deterministic
//! order the pagination math relies on. The member→group left join is a
//! point lookup into the groups tree, deferred until a fragment or the
//! projection actually needs it.

use sled::{Db, Tree};
use tracing::debug;

use rosterdb_proto::{CompositeFilter, MemberGroupRow};

use super::codec::{
    decode_group, decode_key, decode_member, encode_group, encode_key, encode_member,
};
use super::config::StoreConfig;
use crate::error::Error;
use crate::model::{Group, Member};
use crate::query::{FilterEvaluator, SearchStore};

/// Tree name for member records.
const MEMBERS_TREE: &str = "members";

/// Tree name for group records.
const GROUPS_TREE: &str = "groups";

/// The store collaborator wrapping sled.
pub struct StoreEngine {
    /// The underlying sled database.
    db: Db,

    /// Tree for member records.
    members: Tree,

    /// Tree for group records.
    groups: Tree,
}

impl StoreEngine {
    /// Open or create a store with the given configuration.
    pub fn open(config: StoreConfig) -> Result<Self, Error> {
        let db = config.to_sled_config().open()?;
        let members = db.open_tree(MEMBERS_TREE)?;
        let groups = db.open_tree(GROUPS_TREE)?;

        Ok(Self {
            db,
            members,
            groups,
        })
    }

    /// Insert or replace a member record.
    pub fn insert_member(&self, member: &Member) -> Result<(), Error> {
        let value = encode_member(member)?;
        self.members.insert(encode_key(member.id), value)?;
        Ok(())
    }

    /// Insert or replace a group record.
    pub fn insert_group(&self, group: &Group) -> Result<(), Error> {
        let value = encode_group(group)?;
        self.groups.insert(encode_key(group.id), value)?;
        Ok(())
    }

    /// Get a member by id.
    pub fn get_member(&self, id: u64) -> Result<Option<Member>, Error> {
        match self.members.get(encode_key(id))? {
            Some(bytes) => Ok(Some(decode_member(id, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Get a group by id.
    pub fn get_group(&self, id: u64) -> Result<Option<Group>, Error> {
        match self.groups.get(encode_key(id))? {
            Some(bytes) => Ok(Some(decode_group(id, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Flush dirty buffers to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }

    /// Fetch the member-name column on its own.
    ///
    /// With `distinct`, duplicates are dropped keeping first occurrence in
    /// id order.
    pub fn member_names(&self, distinct: bool) -> Result<Vec<String>, Error> {
        let mut names = Vec::new();
        for member in self.scan_members() {
            let member = member?;
            if !distinct || !names.contains(&member.name) {
                names.push(member.name);
            }
        }
        Ok(names)
    }

    /// Rename every member matching the filter. Returns the affected count.
    ///
    /// Rows the caller fetched earlier are not touched; re-query after bulk
    /// mutations.
    pub fn update_name_where(
        &self,
        filter: &CompositeFilter,
        new_name: &str,
    ) -> Result<u64, Error> {
        let matched = self.collect_matching(filter)?;
        for member in &matched {
            let renamed = Member {
                name: new_name.to_string(),
                ..member.clone()
            };
            self.insert_member(&renamed)?;
        }
        debug!(affected = matched.len(), "bulk rename applied");
        Ok(matched.len() as u64)
    }

    /// Delete every member matching the filter. Returns the affected count.
    pub fn delete_where(&self, filter: &CompositeFilter) -> Result<u64, Error> {
        let matched = self.collect_matching(filter)?;
        for member in &matched {
            self.members.remove(encode_key(member.id))?;
        }
        debug!(affected = matched.len(), "bulk delete applied");
        Ok(matched.len() as u64)
    }

    /// Iterate members in ascending id order.
    fn scan_members(&self) -> impl Iterator<Item = Result<Member, Error>> + '_ {
        self.members.iter().map(|entry| {
            let (key, value) = entry?;
            let id = decode_key(&key)?;
            decode_member(id, &value)
        })
    }

    /// Left-join lookup: the member's group name, `None` when the member has
    /// no group or the group record is gone.
    fn group_name_of(&self, member: &Member) -> Result<Option<String>, Error> {
        match member.group_id {
            Some(group_id) => Ok(self.get_group(group_id)?.map(|g| g.name)),
            None => Ok(None),
        }
    }

    /// Evaluate the filter, resolving the group only when a fragment needs it.
    fn filter_matches(&self, filter: &CompositeFilter, member: &Member) -> Result<bool, Error> {
        if !FilterEvaluator::matches_scalar(filter, member) {
            return Ok(false);
        }
        if !filter.references_group() {
            return Ok(true);
        }
        let group_name = self.group_name_of(member)?;
        Ok(FilterEvaluator::matches_group(
            filter,
            group_name.as_deref(),
        ))
    }

    /// Project one member row, left-joining its group fields.
    fn project(&self, member: Member) -> Result<MemberGroupRow, Error> {
        let group = match member.group_id {
            Some(group_id) => self.get_group(group_id)?,
            None => None,
        };
        Ok(MemberGroupRow {
            member_id: member.id,
            name: member.name,
            age: member.age,
            group_id: group.as_ref().map(|g| g.id),
            group_name: group.map(|g| g.name),
        })
    }

    fn collect_matching(&self, filter: &CompositeFilter) -> Result<Vec<Member>, Error> {
        let mut matched = Vec::new();
        for member in self.scan_members() {
            let member = member?;
            if self.filter_matches(filter, &member)? {
                matched.push(member);
            }
        }
        Ok(matched)
    }
}

impl SearchStore for StoreEngine {
    fn fetch_all(&self, filter: &CompositeFilter) -> Result<Vec<MemberGroupRow>, Error> {
        let mut rows = Vec::new();
        for member in self.scan_members() {
            let member = member?;
            if self.filter_matches(filter, &member)? {
                rows.push(self.project(member)?);
            }
        }
        Ok(rows)
    }

    fn fetch_window(
        &self,
        filter: &CompositeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MemberGroupRow>, Error> {
        let mut skipped = 0u64;
        let mut rows = Vec::new();
        for member in self.scan_members() {
            let member = member?;
            if !self.filter_matches(filter, &member)? {
                continue;
            }
            if skipped < offset {
                skipped += 1;
                continue;
            }
            rows.push(self.project(member)?);
            if rows.len() as u64 == limit {
                break;
            }
        }
        Ok(rows)
    }

    fn count(&self, filter: &CompositeFilter) -> Result<u64, Error> {
        // Count projection: no row materialization, and the group lookup
        // inside filter_matches only happens when a fragment references the
        // group; the join cannot change member cardinality otherwise.
        let mut total = 0u64;
        for member in self.scan_members() {
            let member = member?;
            if self.filter_matches(filter, &member)? {
                total += 1;
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterdb_proto::SearchCondition;

    use crate::query::compose;

    fn engine() -> StoreEngine {
        StoreEngine::open(StoreConfig::temporary()).unwrap()
    }

    fn seed(engine: &StoreEngine) {
        engine.insert_group(&Group::new(1, "teamA")).unwrap();
        engine.insert_group(&Group::new(2, "teamB")).unwrap();
        engine
            .insert_member(&Member::in_group(1, "member1", 10, 1))
            .unwrap();
        engine
            .insert_member(&Member::in_group(2, "member2", 20, 1))
            .unwrap();
        engine
            .insert_member(&Member::in_group(3, "member3", 30, 2))
            .unwrap();
        engine
            .insert_member(&Member::in_group(4, "member4", 40, 2))
            .unwrap();
    }

    #[test]
    fn test_fetch_all_unfiltered_in_id_order() {
        let engine = engine();
        seed(&engine);

        let rows = engine.fetch_all(&CompositeFilter::match_all()).unwrap();
        assert_eq!(rows.len(), 4);
        let ids: Vec<u64> = rows.iter().map(|r| r.member_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(rows[0].group_name.as_deref(), Some("teamA"));
    }

    #[test]
    fn test_left_join_keeps_ungrouped_members() {
        let engine = engine();
        seed(&engine);
        engine.insert_member(&Member::new(5, "drifter", 50)).unwrap();

        let rows = engine.fetch_all(&CompositeFilter::match_all()).unwrap();
        assert_eq!(rows.len(), 5);
        let drifter = rows.iter().find(|r| r.member_id == 5).unwrap();
        assert_eq!(drifter.group_id, None);
        assert_eq!(drifter.group_name, None);
    }

    #[test]
    fn test_left_join_handles_dangling_group_id() {
        let engine = engine();
        engine
            .insert_member(&Member::in_group(1, "orphan", 33, 99))
            .unwrap();

        let rows = engine.fetch_all(&CompositeFilter::match_all()).unwrap();
        assert_eq!(rows[0].group_id, None);
        assert_eq!(rows[0].group_name, None);
    }

    #[test]
    fn test_fetch_window() {
        let engine = engine();
        seed(&engine);

        let rows = engine
            .fetch_window(&CompositeFilter::match_all(), 1, 2)
            .unwrap();
        let ids: Vec<u64> = rows.iter().map(|r| r.member_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_window_offset_past_end() {
        let engine = engine();
        seed(&engine);

        let rows = engine
            .fetch_window(&CompositeFilter::match_all(), 10, 3)
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_count_with_group_filter() {
        let engine = engine();
        seed(&engine);

        let filter = compose(&SearchCondition::new().with_group_name("teamB"));
        assert_eq!(engine.count(&filter).unwrap(), 2);
    }

    #[test]
    fn test_count_without_group_filter() {
        let engine = engine();
        seed(&engine);

        let filter = compose(&SearchCondition::new().with_age_goe(25));
        assert_eq!(engine.count(&filter).unwrap(), 2);
    }

    #[test]
    fn test_member_names_distinct() {
        let engine = engine();
        seed(&engine);
        engine
            .insert_member(&Member::new(5, "member1", 99))
            .unwrap();

        let all = engine.member_names(false).unwrap();
        assert_eq!(all.len(), 5);

        let distinct = engine.member_names(true).unwrap();
        assert_eq!(
            distinct,
            vec!["member1", "member2", "member3", "member4"]
        );
    }

    #[test]
    fn test_bulk_rename() {
        let engine = engine();
        seed(&engine);

        let filter = compose(&SearchCondition::new().with_age_loe(28));
        let affected = engine.update_name_where(&filter, "guest").unwrap();
        assert_eq!(affected, 2);

        assert_eq!(engine.get_member(1).unwrap().unwrap().name, "guest");
        assert_eq!(engine.get_member(2).unwrap().unwrap().name, "guest");
        assert_eq!(engine.get_member(3).unwrap().unwrap().name, "member3");
    }

    #[test]
    fn test_reopen_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        {
            let engine = StoreEngine::open(StoreConfig::new(dir.path())).unwrap();
            engine.insert_group(&Group::new(1, "teamA")).unwrap();
            engine
                .insert_member(&Member::in_group(1, "member1", 10, 1))
                .unwrap();
            engine.flush().unwrap();
        }

        let engine = StoreEngine::open(StoreConfig::new(dir.path())).unwrap();
        let member = engine.get_member(1).unwrap().unwrap();
        assert_eq!(member.name, "member1");
        assert_eq!(engine.group_name_of(&member).unwrap().as_deref(), Some("teamA"));
    }

    #[test]
    fn test_bulk_delete() {
        let engine = engine();
        seed(&engine);

        let filter = compose(&SearchCondition::new().with_age_goe(18));
        let affected = engine.delete_where(&filter).unwrap();
        assert_eq!(affected, 3);

        let rows = engine.fetch_all(&CompositeFilter::match_all()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].member_id, 1);
    }
}
