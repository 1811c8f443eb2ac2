//! Validation error types.

use thiserror::Error;

/// Errors raised before any query is issued.
#[derive(Debug, Error)]
pub enum Error {
    /// A page request asked for an empty window.
    #[error("invalid page request: limit must be at least 1, got {limit}")]
    InvalidPageRequest { limit: u64 },
}
