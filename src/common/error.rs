//! Error types for the B-tree index.
//!
//! `search` and `insert` never fail. The only fallible operation is the
//! structural checker, which reports what it found instead of panicking so
//! tests can assert on it.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// A violated structural invariant.
///
/// Nodes are identified by their path from the root: the sequence of child
/// indices taken to reach them. The root's path is `[]`.
///
/// Items are rendered with their `Debug` representation so the error type
/// does not carry the item type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two adjacent items in the in-order traversal compare equal.
    #[error("tree contains duplicate items: {first}, {second}")]
    Duplicate { first: String, second: String },

    /// The in-order traversal is not ascending.
    #[error("tree items not in ascending order: {earlier} comes before {later}")]
    OutOfOrder { earlier: String, later: String },

    /// The root holds more than `2t - 1` items.
    #[error("root node has invalid item count {count} (max {max})")]
    RootOverflow { count: usize, max: usize },

    /// A non-root node holds fewer than `t - 1` or more than `2t - 1` items.
    #[error("node at {path:?} has invalid item count {count} (expected {min}..={max})")]
    NodeOccupancy {
        path: Vec<usize>,
        count: usize,
        min: usize,
        max: usize,
    },

    /// An internal node does not have exactly one more child than items.
    #[error("node at {path:?} has {children} children for {items} items")]
    ChildCount {
        path: Vec<usize>,
        items: usize,
        children: usize,
    },

    /// A leaf sits at a different depth than the first leaf visited.
    #[error("leaf at {path:?} has depth {depth}, expected {expected}")]
    UnevenLeafDepth {
        path: Vec<usize>,
        depth: usize,
        expected: usize,
    },
}
