//! Query engine for rosterdb.
//!
//! This module turns a `SearchCondition` into a `CompositeFilter`, evaluates
//! that filter against stored entities, and coordinates paginated fetches
//! including the count-elision decision.

mod filter;
mod fragment;
mod paginate;
mod store;

pub use filter::FilterEvaluator;
pub use fragment::{age_goe, age_loe, compose, group_name_eq, name_eq};
pub use paginate::CountPlan;
pub use store::SearchStore;
