//! Rosterdb value types shared between callers and the engine.
//!
//! This crate defines the search condition, filter IR, and page types, using
//! rkyv for zero-copy serialization.
//!
//! # Modules
//!
//! - [`condition`] - Search conditions with independently optional criteria
//! - [`filter`] - Predicate fragments and the composite filter IR
//! - [`page`] - Page requests and paginated results
//! - [`row`] - The projected member/group row returned to callers
//! - [`error`] - Validation error types
//!
//! # Serialization
//!
//! The leaf types derive `rkyv::Archive`, `rkyv::Serialize`, and
//! `rkyv::Deserialize` as well as serde's derives. Paged results are
//! in-process values and carry only the serde derives.

pub mod condition;
pub mod error;
pub mod filter;
pub mod page;
pub mod row;

pub use condition::SearchCondition;
pub use error::Error;
pub use filter::{CompositeFilter, Predicate};
pub use page::{Page, PageRequest};
pub use row::MemberGroupRow;
