//! Structural invariant checking, for tests and debugging.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::common::config::{max_items, min_items};
use crate::common::{Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::BTree;

impl<T: Ord + Debug> BTree<T> {
    /// Verify every structural invariant of the tree.
    ///
    /// Checks, in order:
    /// 1. The in-order traversal is strictly ascending (no duplicates)
    /// 2. The root holds at most `2t - 1` items
    /// 3. Every internal node has one more child than items
    /// 4. Every non-root node holds `t - 1 ..= 2t - 1` items
    /// 5. Every leaf is at the same depth
    ///
    /// Never modifies the tree.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        check_order(&self.root)?;

        let max = max_items(self.min_degree);
        if self.root.len() > max {
            return Err(Error::RootOverflow {
                count: self.root.len(),
                max,
            });
        }

        let mut checker = ShapeChecker {
            min_degree: self.min_degree,
            path: Vec::new(),
            leaf_depth: None,
        };
        checker.visit(&self.root, 1)
    }
}

fn check_order<T: Ord + Debug>(root: &Node<T>) -> Result<()> {
    let mut items = Vec::new();
    collect_in_order(root, &mut items);

    for pair in items.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        match later.cmp(earlier) {
            Ordering::Greater => {}
            Ordering::Equal => {
                return Err(Error::Duplicate {
                    first: format!("{:?}", earlier),
                    second: format!("{:?}", later),
                })
            }
            Ordering::Less => {
                return Err(Error::OutOfOrder {
                    earlier: format!("{:?}", earlier),
                    later: format!("{:?}", later),
                })
            }
        }
    }
    Ok(())
}

/// Left child, item, next child, item, ..., last child.
fn collect_in_order<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
    for (i, item) in node.items.iter().enumerate() {
        if let Some(child) = node.children.get(i) {
            collect_in_order(child, out);
        }
        out.push(item);
    }
    if let Some(last) = node.children.get(node.items.len()) {
        collect_in_order(last, out);
    }
}

/// Pre-order walk tracking the path and depth of each node.
struct ShapeChecker {
    min_degree: usize,
    path: Vec<usize>,
    leaf_depth: Option<usize>,
}

impl ShapeChecker {
    fn visit<T>(&mut self, node: &Node<T>, depth: usize) -> Result<()> {
        let is_root = self.path.is_empty();
        let count = node.items.len();

        if !is_root {
            let (min, max) = (min_items(self.min_degree), max_items(self.min_degree));
            if count < min || count > max {
                return Err(Error::NodeOccupancy {
                    path: self.path.clone(),
                    count,
                    min,
                    max,
                });
            }
        }

        if node.children.is_empty() {
            return self.visit_leaf(depth);
        }

        if node.children.len() != count + 1 {
            return Err(Error::ChildCount {
                path: self.path.clone(),
                items: count,
                children: node.children.len(),
            });
        }

        for (i, child) in node.children.iter().enumerate() {
            self.path.push(i);
            self.visit(child, depth + 1)?;
            self.path.pop();
        }
        Ok(())
    }

    fn visit_leaf(&mut self, depth: usize) -> Result<()> {
        match self.leaf_depth {
            None => {
                self.leaf_depth = Some(depth);
                Ok(())
            }
            Some(expected) if expected == depth => Ok(()),
            Some(expected) => Err(Error::UnevenLeafDepth {
                path: self.path.clone(),
                depth,
                expected,
            }),
        }
    }
}
