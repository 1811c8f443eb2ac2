//! Page requests and paginated results.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::Error;

/// An offset/limit window into an ordered result set.
///
/// Constructed through [`PageRequest::new`], which rejects a zero limit
/// before any query is issued. Offsets are unsigned, so a negative offset
/// is unrepresentable by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize,
)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

impl PageRequest {
    /// Create a validated page request.
    pub fn new(offset: u64, limit: u64) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::InvalidPageRequest { limit });
        }
        Ok(Self { offset, limit })
    }

    /// Create a first-page request with the given limit.
    pub fn first(limit: u64) -> Result<Self, Error> {
        Self::new(0, limit)
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The request for the page after this one at the same limit.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset + self.limit,
            limit: self.limit,
        }
    }
}

/// One page of results plus the total match count.
///
/// Assembled from already-computed parts; carries the original request so
/// callers can derive page count and has-next without another query.
#[derive(Debug, Clone, PartialEq, SerdeSerialize, SerdeDeserialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    request: PageRequest,
}

impl<T> Page<T> {
    /// Assemble a page from content rows, the original request, and the total.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    /// The content rows of this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its content rows.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Total number of matching rows across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The request this page answers.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages at this request's limit.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.request.limit())
    }

    /// Whether rows exist past the end of this page.
    pub fn has_next(&self) -> bool {
        self.request.offset() + (self.items.len() as u64) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(Error::InvalidPageRequest { limit: 0 })
        ));
    }

    #[test]
    fn test_next_advances_offset() {
        let request = PageRequest::new(3, 3).unwrap();
        let next = request.next();
        assert_eq!(next.offset(), 6);
        assert_eq!(next.limit(), 3);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let request = PageRequest::first(3).unwrap();
        let page = Page::new(vec![1, 2, 3], request, 4);
        assert_eq!(page.page_count(), 2);
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let request = PageRequest::new(3, 3).unwrap();
        let page = Page::new(vec![4], request, 4);
        assert_eq!(page.page_count(), 2);
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_result() {
        let request = PageRequest::first(10).unwrap();
        let page: Page<i32> = Page::new(vec![], request, 0);
        assert!(page.is_empty());
        assert_eq!(page.page_count(), 0);
        assert!(!page.has_next());
    }
}
