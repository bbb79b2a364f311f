//! The public B-tree handle.

use std::mem;

use crate::common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::index::btree::node::Node;
use crate::index::btree::TreeStats;

/// An in-memory B-tree holding unique items ordered by `Ord`.
///
/// Items that compare `Equal` are the same key: inserting one replaces the
/// stored item and hands the old one back. This makes the tree usable as a
/// map by storing a key/value struct whose `Ord` looks only at the key.
///
/// # Structure
/// ```text
///                     root [ 20 | 40 ]
///                    /        |        \
///        [ 5 | 10 ]       [ 25 ]       [ 45 | 50 | 60 ]
/// ```
/// - Every non-root node holds `t - 1 ..= 2t - 1` items
/// - The root holds at most `2t - 1` items
/// - All leaves are at the same depth
///
/// Full nodes are split on the way down, so an insert touches each level
/// once and never has to walk back up.
///
/// # Thread Safety
/// The tree does no locking. Share it behind an external lock
/// (e.g. `parking_lot::RwLock`) for single-writer/multi-reader access.
///
/// # Usage
/// ```
/// use stdbtree::BTree;
///
/// let mut tree = BTree::new(2);
/// for x in [5, 3, 8, 1, 4, 7, 2, 6] {
///     assert_eq!(tree.insert(x), None);
/// }
///
/// assert_eq!(tree.len(), 8);
/// assert_eq!(tree.search(&4), Some(&4));
/// assert_eq!(tree.search(&9), None);
/// assert!(tree.check_invariants().is_ok());
/// ```
#[derive(Debug)]
pub struct BTree<T> {
    /// Minimum degree `t` (immutable after construction).
    pub(super) min_degree: usize,

    /// Replaced only when it is full at the start of an insert.
    pub(super) root: Node<T>,

    /// Number of distinct items stored.
    len: usize,

    /// Operation counters.
    stats: TreeStats,
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree.
    ///
    /// # Arguments
    /// * `min_degree` - The minimum degree `t`. Nodes hold up to `2t - 1`
    ///   items and up to `2t` children.
    ///
    /// # Panics
    /// Panics if `min_degree < 2`.
    pub fn new(min_degree: usize) -> Self {
        assert!(
            min_degree >= MIN_DEGREE_FLOOR,
            "invalid minimum degree {} for btree, must be >= {}",
            min_degree,
            MIN_DEGREE_FLOOR
        );

        Self {
            min_degree,
            root: Node::new_leaf(min_degree),
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// Find the stored item equal to `item`.
    pub fn search(&self, item: &T) -> Option<&T> {
        let found = self.root.search(item);
        self.stats.record_search(found.is_some());
        found
    }

    /// Insert `item`, replacing an equal item if one is stored.
    ///
    /// Returns the replaced item, or `None` if `item` is a new key.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let t = self.min_degree;

        if self.root.is_full(t) {
            // A node cannot promote its median without a parent, so give
            // the old root one.
            let old_root = mem::replace(&mut self.root, Node::new_leaf(t));
            self.root = Node::with_only_child(t, old_root);
            self.root.split_child(t, 0);
            self.stats.record_root_split();
        }

        let previous = self.root.insert(t, item);
        if previous.is_none() {
            self.len += 1;
        }
        self.stats.record_insert(previous.is_some());
        previous
    }
}

impl<T> BTree<T> {
    /// Number of distinct items stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The minimum degree `t` this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of levels. An empty tree, or one whose root is a leaf, has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children.first() {
            node = first;
            height += 1;
        }
        height
    }

    /// Operation counters for this tree.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DEGREE)
    }
}

impl<T: Ord> Extend<T> for BTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
