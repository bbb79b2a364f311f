//! B-tree node and the recursive search/insert/split primitives.

use std::cmp::Ordering;
use std::mem;

use crate::common::config::{max_children, max_items};

/// A single node of the tree.
///
/// # Layout
/// ```text
///            items:    [ k0 | k1 | k2 ]
///  children: [ c0 ]  [ c1 ]  [ c2 ]  [ c3 ]
///
///  c0 < k0 < c1 < k1 < c2 < k2 < c3
/// ```
///
/// A leaf has no children. An internal node always has exactly
/// `items.len() + 1` children once it is in the tree. Children are owned
/// directly; there are no parent or sibling pointers.
///
/// The minimum degree is not stored per node; every operation that depends
/// on it receives it from the tree.
#[derive(Debug)]
pub(super) struct Node<T> {
    /// Ascending, duplicate-free items. At most `2t - 1`.
    pub(super) items: Vec<T>,

    /// Owned subtrees. Empty for a leaf, at most `2t` otherwise.
    pub(super) children: Vec<Node<T>>,
}

impl<T: Ord> Node<T> {
    /// Create an empty leaf with room for a full node.
    pub(super) fn new_leaf(min_degree: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_items(min_degree)),
            children: Vec::new(),
        }
    }

    /// Create an internal node whose only child is `child`.
    ///
    /// The result is not a valid node until the child is split, which gives
    /// it its first item and second child.
    pub(super) fn with_only_child(min_degree: usize, child: Node<T>) -> Self {
        let mut children = Vec::with_capacity(max_children(min_degree));
        children.push(child);
        Self {
            items: Vec::with_capacity(max_items(min_degree)),
            children,
        }
    }

    #[inline]
    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of items currently held.
    #[inline]
    pub(super) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(super) fn is_full(&self, min_degree: usize) -> bool {
        self.items.len() == max_items(min_degree)
    }

    /// Scan the items in ascending order.
    ///
    /// Returns `Ok(i)` if `items[i]` equals `item`, or `Err(i)` where `i` is
    /// the first index whose item sorts after `item` (`len()` if none does).
    /// `Err(i)` is both the insertion slot and the child to descend into.
    fn locate(&self, item: &T) -> Result<usize, usize> {
        for (i, current) in self.items.iter().enumerate() {
            match item.cmp(current) {
                Ordering::Greater => continue,
                Ordering::Equal => return Ok(i),
                Ordering::Less => return Err(i),
            }
        }
        Err(self.items.len())
    }

    /// Find the item equal to `target` in the subtree rooted here.
    pub(super) fn search(&self, target: &T) -> Option<&T> {
        match self.locate(target) {
            Ok(i) => Some(&self.items[i]),
            Err(_) if self.is_leaf() => None,
            // children[i] holds everything between items[i - 1] and items[i]
            Err(i) => self.children[i].search(target),
        }
    }

    /// Insert into a leaf, replacing an equal item if one exists.
    ///
    /// Returns the replaced item, or `None` for a fresh insertion.
    fn insert_leaf(&mut self, item: T) -> Option<T> {
        debug_assert!(self.is_leaf());
        match self.locate(&item) {
            Ok(i) => Some(mem::replace(&mut self.items[i], item)),
            Err(i) => {
                self.items.insert(i, item);
                None
            }
        }
    }

    /// Insert into the subtree rooted here.
    ///
    /// The caller guarantees this node is not full, so a split of one of its
    /// children always has room for the promoted median.
    ///
    /// Returns the replaced item, or `None` for a fresh insertion.
    pub(super) fn insert(&mut self, min_degree: usize, item: T) -> Option<T> {
        debug_assert!(!self.is_full(min_degree));

        if self.is_leaf() {
            return self.insert_leaf(item);
        }

        let mut index = match self.locate(&item) {
            Ok(i) => return Some(mem::replace(&mut self.items[i], item)),
            Err(i) => i,
        };

        if self.children[index].is_full(min_degree) {
            let ordering = item.cmp(self.split_child(min_degree, index));
            match ordering {
                Ordering::Less => {}
                Ordering::Equal => return Some(mem::replace(&mut self.items[index], item)),
                Ordering::Greater => index += 1,
            }
        }

        self.children[index].insert(min_degree, item)
    }

    /// Split the full child at `index` around its median.
    ///
    /// ```text
    /// before:  parent [ .. | p | .. ]          after:  parent [ .. | m | p | .. ]
    ///                      |                                     /   \
    ///            child [ a b m c d ]                   [ a b ]     [ c d ]
    /// ```
    ///
    /// The left half stays in place, the right half becomes a new sibling at
    /// `index + 1`, and the median moves up into this node at `index`. Both
    /// halves end with `t - 1` items.
    ///
    /// Returns the promoted median.
    pub(super) fn split_child(&mut self, min_degree: usize, index: usize) -> &T {
        let child = &mut self.children[index];
        debug_assert!(child.is_full(min_degree));

        let mut sibling = Node::new_leaf(min_degree);
        sibling.items.extend(child.items.drain(min_degree..));
        if !child.is_leaf() {
            sibling.children.reserve_exact(max_children(min_degree));
            sibling.children.extend(child.children.drain(min_degree..));
        }

        // items[t - 1] is now the last one left in the child
        let Some(median) = child.items.pop() else {
            unreachable!("a full child always has a median");
        };

        self.items.insert(index, median);
        self.children.insert(index + 1, sibling);
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: usize = 2;

    fn leaf(items: &[i32]) -> Node<i32> {
        let mut node = Node::new_leaf(T);
        node.items.extend_from_slice(items);
        node
    }

    fn internal(items: &[i32], children: Vec<Node<i32>>) -> Node<i32> {
        Node {
            items: items.to_vec(),
            children,
        }
    }

    #[test]
    fn test_new_leaf_is_empty() {
        let node: Node<i32> = Node::new_leaf(T);
        assert!(node.is_leaf());
        assert_eq!(node.len(), 0);
        assert!(!node.is_full(T));
        assert!(node.items.capacity() >= max_items(T));
    }

    #[test]
    fn test_locate() {
        let node = leaf(&[10, 20, 30]);
        assert_eq!(node.locate(&5), Err(0));
        assert_eq!(node.locate(&10), Ok(0));
        assert_eq!(node.locate(&15), Err(1));
        assert_eq!(node.locate(&30), Ok(2));
        assert_eq!(node.locate(&35), Err(3));
    }

    #[test]
    fn test_search_leaf() {
        let node = leaf(&[1, 3, 5]);
        assert_eq!(node.search(&3), Some(&3));
        assert_eq!(node.search(&0), None);
        assert_eq!(node.search(&4), None);
        assert_eq!(node.search(&6), None);
    }

    #[test]
    fn test_search_descends_into_aligned_child() {
        let node = internal(&[10, 20], vec![leaf(&[1, 5]), leaf(&[15]), leaf(&[25, 30])]);

        // Below the first separator: children[0]
        assert_eq!(node.search(&5), Some(&5));
        // Between separators: children[1]
        assert_eq!(node.search(&15), Some(&15));
        // Past the last separator: rightmost child
        assert_eq!(node.search(&30), Some(&30));
        // Separators themselves
        assert_eq!(node.search(&20), Some(&20));

        assert_eq!(node.search(&12), None);
        assert_eq!(node.search(&99), None);
    }

    #[test]
    fn test_insert_leaf_keeps_order() {
        let mut node = Node::new_leaf(3);
        for x in [4, 1, 3] {
            assert_eq!(node.insert_leaf(x), None);
        }
        assert_eq!(node.items, vec![1, 3, 4]);
    }

    #[test]
    fn test_insert_leaf_replaces_equal() {
        let mut node = leaf(&[1, 2]);
        assert_eq!(node.insert_leaf(2), Some(2));
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn test_split_leaf_child() {
        let mut parent = internal(&[50], vec![leaf(&[1, 2, 3]), leaf(&[60])]);

        let median = *parent.split_child(T, 0);

        assert_eq!(median, 2);
        assert_eq!(parent.items, vec![2, 50]);
        assert_eq!(parent.children.len(), 3);
        assert_eq!(parent.children[0].items, vec![1]);
        assert_eq!(parent.children[1].items, vec![3]);
        assert_eq!(parent.children[2].items, vec![60]);
    }

    #[test]
    fn test_split_internal_child_moves_children() {
        let full = internal(
            &[10, 20, 30],
            vec![leaf(&[5]), leaf(&[15]), leaf(&[25]), leaf(&[35])],
        );
        let mut parent = Node::with_only_child(T, full);

        let median = *parent.split_child(T, 0);

        assert_eq!(median, 20);
        assert_eq!(parent.items, vec![20]);
        let (left, right) = (&parent.children[0], &parent.children[1]);
        assert_eq!(left.items, vec![10]);
        assert_eq!(right.items, vec![30]);
        assert_eq!(left.children.len(), T);
        assert_eq!(right.children.len(), T);
        assert_eq!(right.children[0].items, vec![25]);
        assert_eq!(right.children[1].items, vec![35]);
    }

    #[test]
    fn test_insert_splits_full_child_before_descending() {
        let mut parent = internal(&[50], vec![leaf(&[1, 2, 3]), leaf(&[60])]);

        assert_eq!(parent.insert(T, 4), None);

        assert_eq!(parent.items, vec![2, 50]);
        assert_eq!(parent.children[1].items, vec![3, 4]);
    }

    #[test]
    fn test_insert_matching_promoted_median_replaces_in_parent() {
        let mut parent = internal(&[50], vec![leaf(&[1, 2, 3]), leaf(&[60])]);

        assert_eq!(parent.insert(T, 2), Some(2));

        assert_eq!(parent.items, vec![2, 50]);
        assert_eq!(parent.children[0].items, vec![1]);
        assert_eq!(parent.children[1].items, vec![3]);
    }

    #[test]
    fn test_insert_matching_separator_does_not_descend() {
        let mut parent = internal(&[50], vec![leaf(&[1, 2, 3]), leaf(&[60])]);

        assert_eq!(parent.insert(T, 50), Some(50));

        // Full child was left alone
        assert_eq!(parent.children[0].items, vec![1, 2, 3]);
    }
}
