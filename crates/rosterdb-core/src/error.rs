//! Core error types.

use thiserror::Error;

/// Core engine errors.
///
/// `Validation` means the caller's input was rejected before any query was
/// issued; `Storage` and the codec variants mean the backing store failed.
/// Nothing here is retried or logged internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Caller input rejected before any query was issued.
    #[error("validation error: {0}")]
    Validation(#[from] rosterdb_proto::Error),

    /// Record decoding error.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Key decoding error.
    #[error("invalid key format")]
    InvalidKey,

    /// Record not found.
    #[error("record not found")]
    NotFound,
}

impl Error {
    /// Whether this failure originated in the backing store rather than in
    /// the caller's input.
    pub fn is_store_failure(&self) -> bool {
        !matches!(self, Error::Validation(_))
    }
}
