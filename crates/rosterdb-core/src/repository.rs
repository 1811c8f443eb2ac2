//! The caller-facing search repository.
//!
//! Stateless per call: the repository holds only a handle to the store
//! collaborator, so one instance can serve concurrent callers without
//! coordination. Every operation composes the filter fresh from the given
//! condition, runs its queries, and assembles the result: no shared mutable
//! state, no caches, no retries.

use tracing::debug;

use rosterdb_proto::{MemberGroupRow, Page, PageRequest, SearchCondition};

use crate::error::Error;
use crate::query::{compose, CountPlan, SearchStore};

/// Filtered, paginated member lookups over a store collaborator.
pub struct MemberSearchRepository<S> {
    store: S,
}

impl<S: SearchStore> MemberSearchRepository<S> {
    /// Create a repository over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unpaged search: every row matching the condition, in id order.
    pub fn search(&self, condition: &SearchCondition) -> Result<Vec<MemberGroupRow>, Error> {
        let filter = compose(condition);
        self.store.fetch_all(&filter)
    }

    /// Paged search with count elision.
    ///
    /// Runs the content query first; a short page already determines the
    /// total, so the count query only runs when the page came back full.
    /// This is the default strategy: the common cases (small result sets,
    /// walking to the final page) cost one round-trip instead of two.
    pub fn search_page(
        &self,
        condition: &SearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberGroupRow>, Error> {
        let filter = compose(condition);
        let items = self
            .store
            .fetch_window(&filter, request.offset(), request.limit())?;

        let total = match CountPlan::decide(items.len(), request.offset(), request.limit()) {
            CountPlan::Known(total) => total,
            CountPlan::CountQuery => self.store.count(&filter)?,
        };

        Ok(Page::new(items, request, total))
    }

    /// Paged search via the combined content+count call.
    ///
    /// One logical call to the store, two physical queries under the hood.
    /// Acceptable default when the elision heuristic is unwanted, but
    /// wasteful where [`search_page`](Self::search_page) could skip the
    /// count.
    pub fn search_page_simple(
        &self,
        condition: &SearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberGroupRow>, Error> {
        let filter = compose(condition);
        let (items, total) =
            self.store
                .fetch_window_counted(&filter, request.offset(), request.limit())?;
        debug!(total, rows = items.len(), "combined page fetch");
        Ok(Page::new(items, request, total))
    }

    /// Paged search with content and count issued as two explicit queries.
    ///
    /// The count query runs with a count projection: the store drops the
    /// group join unless a fragment filters on the group, since the join
    /// never changes member cardinality otherwise.
    pub fn search_page_split(
        &self,
        condition: &SearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberGroupRow>, Error> {
        let filter = compose(condition);
        let items = self
            .store
            .fetch_window(&filter, request.offset(), request.limit())?;
        let total = self.store.count(&filter)?;
        Ok(Page::new(items, request, total))
    }
}
