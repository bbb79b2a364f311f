//! stdbtree - An in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      BTree<T>                           │
//! │   min_degree (t) | len | stats | root                   │
//! │         search / insert / check_invariants              │
//! ├─────────────────────────────────────────────────────────┤
//! │                      Node<T>                            │
//! │   items: up to 2t-1    children: up to 2t (owned)       │
//! │         search / insert / split_child                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Configuration constants and the error type
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use stdbtree::BTree;
//! use std::cmp::Ordering;
//!
//! // Entries ordered by key only: an equal key replaces the stored entry.
//! #[derive(Debug)]
//! struct Entry {
//!     key: u32,
//!     value: &'static str,
//! }
//!
//! impl PartialEq for Entry {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.key == other.key
//!     }
//! }
//! impl Eq for Entry {}
//! impl PartialOrd for Entry {
//!     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
//!         Some(self.cmp(other))
//!     }
//! }
//! impl Ord for Entry {
//!     fn cmp(&self, other: &Self) -> Ordering {
//!         self.key.cmp(&other.key)
//!     }
//! }
//!
//! let mut tree = BTree::new(2);
//! assert!(tree.insert(Entry { key: 10, value: "first" }).is_none());
//!
//! let previous = tree.insert(Entry { key: 10, value: "second" }).unwrap();
//! assert_eq!(previous.value, "first");
//! assert_eq!(tree.len(), 1);
//!
//! let probe = Entry { key: 10, value: "" };
//! assert_eq!(tree.search(&probe).unwrap().value, "second");
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, Result};

pub use index::btree::{BTree, StatsSnapshot, TreeStats};
