//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with upsert semantics

pub mod btree;
