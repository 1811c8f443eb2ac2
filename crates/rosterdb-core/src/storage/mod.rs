//! Store collaborator for rosterdb.
//!
//! This module provides the sled-backed entity store the query engine runs
//! against: record codec, configuration, and the engine itself.

mod codec;
mod config;
mod engine;

pub use codec::{decode_group, decode_member, encode_group, encode_member};
pub use config::StoreConfig;
pub use engine::StoreEngine;
