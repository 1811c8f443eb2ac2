//! The store-execution collaborator contract.

use rosterdb_proto::{CompositeFilter, MemberGroupRow};

use crate::error::Error;

/// The three query capabilities the engine consumes from its store.
///
/// Every method applies the same filter and the same member→group left join,
/// projects into [`MemberGroupRow`], and returns rows in a deterministic
/// order (ascending member id). Each call issues exactly one logical query;
/// no caching, no retries; failures propagate unchanged.
pub trait SearchStore {
    /// Materialize every matching row.
    fn fetch_all(&self, filter: &CompositeFilter) -> Result<Vec<MemberGroupRow>, Error>;

    /// Materialize one window of up to `limit` matching rows starting at
    /// `offset`.
    fn fetch_window(
        &self,
        filter: &CompositeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MemberGroupRow>, Error>;

    /// Count the matching rows without materializing them.
    fn count(&self, filter: &CompositeFilter) -> Result<u64, Error>;

    /// Fetch a window and its total together as one logical call.
    ///
    /// This is still two physical queries under the hood; it exists as the
    /// convenience shape for the combined pagination strategy.
    fn fetch_window_counted(
        &self,
        filter: &CompositeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<MemberGroupRow>, u64), Error> {
        let rows = self.fetch_window(filter, offset, limit)?;
        let total = self.count(filter)?;
        Ok((rows, total))
    }
}

impl<S: SearchStore + ?Sized> SearchStore for &S {
    fn fetch_all(&self, filter: &CompositeFilter) -> Result<Vec<MemberGroupRow>, Error> {
        (**self).fetch_all(filter)
    }

    fn fetch_window(
        &self,
        filter: &CompositeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<MemberGroupRow>, Error> {
        (**self).fetch_window(filter, offset, limit)
    }

    fn count(&self, filter: &CompositeFilter) -> Result<u64, Error> {
        (**self).count(filter)
    }

    fn fetch_window_counted(
        &self,
        filter: &CompositeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<MemberGroupRow>, u64), Error> {
        (**self).fetch_window_counted(filter, offset, limit)
    }
}
