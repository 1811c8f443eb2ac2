//! Rosterdb core - dynamic predicate composition and paginated search.
//!
//! This crate answers filtered, paginated lookups against a store of members
//! linked one-to-many to owning groups. Search criteria are independently
//! optional; the engine folds the present ones into a single conjunctive
//! filter and, on paged fetches, skips the separate count query whenever the
//! content page already determines the total.

pub mod error;
pub mod model;
pub mod query;
pub mod repository;
pub mod storage;

pub use error::Error;
pub use model::{Group, Member};
pub use query::{compose, CountPlan, FilterEvaluator, SearchStore};
pub use repository::MemberSearchRepository;
pub use storage::{StoreConfig, StoreEngine};

/// Re-export shared value types.
pub use rosterdb_proto as proto;
