//! The count-elision decision.
//!
//! After the content query returns, the page already determines the total
//! whenever it came back short: `offset` rows were skipped, `content_len`
//! rows followed, and a short page means nothing comes after them, so
//! `total = offset + content_len`. One rule covers the first page
//! (`offset = 0`, total = content size), the exact last page, and an offset
//! past the end (empty content, total = offset). Only a full page is
//! ambiguous and needs the separate count query.

use tracing::debug;

/// How to obtain the total count for one page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPlan {
    /// The total is already determined by the content page.
    Known(u64),
    /// The page is ambiguous; a count query is required.
    CountQuery,
}

impl CountPlan {
    /// Decide whether the count query can be elided.
    ///
    /// Correct only when row order is deterministic per page, which the
    /// store contract guarantees. The elision skips work; it never
    /// approximates.
    pub fn decide(content_len: usize, offset: u64, limit: u64) -> Self {
        let content_len = content_len as u64;
        if content_len < limit {
            let plan = CountPlan::Known(offset + content_len);
            debug!(offset, limit, content_len, total = offset + content_len, "count query elided");
            plan
        } else {
            debug!(offset, limit, content_len, "full page, count query required");
            CountPlan::CountQuery
        }
    }
}
