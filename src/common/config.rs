//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree.
///
/// With `t = 1` a non-root node could hold zero items, and a split of a
/// full node (one item) would leave nothing for the halves. No valid tree
/// exists below this value.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Minimum degree used by `BTree::default()`.
///
/// # Node Layout
/// With `t = 6`:
/// - Max items per node: 11
/// - Max children per node: 12
/// - Min items per non-root node: 5
pub const DEFAULT_MIN_DEGREE: usize = 6;

/// Maximum number of items a node may hold (`2t - 1`).
#[inline]
pub const fn max_items(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum number of items a non-root node may hold (`t - 1`).
#[inline]
pub const fn min_items(min_degree: usize) -> usize {
    min_degree - 1
}

/// Maximum number of children an internal node may hold (`2t`).
#[inline]
pub const fn max_children(min_degree: usize) -> usize {
    2 * min_degree
}
