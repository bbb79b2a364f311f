//! B-tree index.
//!
//! # Components
//! - [`BTree`] - The public tree handle: search, insert, accessors
//! - `node` - Recursive search/insert/split on a single node
//! - `check` - Structural invariant checker (`BTree::check_invariants`)
//! - [`TreeStats`] - Operation counters

mod check;
mod node;
mod stats;
mod tree;

pub use stats::{StatsSnapshot, TreeStats};
pub use tree::BTree;
