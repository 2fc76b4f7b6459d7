//! Walking a [`Tree`] in level, pre, in, or post order.
//!
//! Every walk visits each node exactly once and returns the keys in visitation order. An empty
//! tree yields nothing.
//!
//! # Examples
//!
//! ```
//! use bst_rebalance::{Order, Tree};
//!
//! let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//!
//! assert_eq!(tree.level_order(), [&5, &3, &8, &1, &4, &7, &9]);
//! assert_eq!(tree.pre_order(), [&5, &3, &1, &4, &8, &7, &9]);
//! assert_eq!(tree.in_order(), [&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.post_order(), [&1, &4, &3, &7, &9, &8, &5]);
//!
//! let mut sum = 0;
//! let visited = tree.traverse(Order::Pre, |k| sum += k);
//! assert_eq!(sum, 37);
//! assert_eq!(visited, tree.pre_order());
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::NodeId;
use crate::Tree;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first, left to right within a level.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Keys come out sorted.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl<K> Tree<K> {
    /// Visits every node in `order`, calling `visit` with each key as it goes, and returns the
    /// keys in the order they were visited.
    pub fn traverse<F>(&self, order: Order, mut visit: F) -> Vec<&K>
    where
        F: FnMut(&K),
    {
        self.node_ids(order)
            .into_iter()
            .map(|id| {
                let key = self.node(id).key();
                visit(key);
                key
            })
            .collect()
    }

    /// Keys in breadth first order.
    pub fn level_order(&self) -> Vec<&K> {
        self.traverse(Order::Level, |_| {})
    }

    /// Keys in pre-order.
    pub fn pre_order(&self) -> Vec<&K> {
        self.traverse(Order::Pre, |_| {})
    }

    /// Keys in sorted order.
    pub fn in_order(&self) -> Vec<&K> {
        self.traverse(Order::In, |_| {})
    }

    /// Keys in post-order.
    pub fn post_order(&self) -> Vec<&K> {
        self.traverse(Order::Post, |_| {})
    }

    /// An iterator over the keys in sorted order. Unlike [`Tree::in_order`] this only holds one
    /// path of the tree at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.collect::<Vec<_>>(), [&2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root_id());
        iter
    }

    /// Handles of every node in `order`. Every walk keeps its own stack or queue so that a
    /// degenerate tree can't overflow the call stack.
    pub(crate) fn node_ids(&self, order: Order) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len());
        match order {
            Order::Level => self.level_ids(&mut ids),
            Order::Pre => self.pre_ids(&mut ids),
            Order::In => {
                let mut iter = self.iter();
                while let Some(id) = iter.next_id() {
                    ids.push(id);
                }
            }
            Order::Post => self.post_ids(&mut ids),
        }
        ids
    }

    fn level_ids(&self, ids: &mut Vec<NodeId>) {
        let mut queue: VecDeque<NodeId> = self.root_id().into_iter().collect();

        while let Some(id) = queue.pop_front() {
            let node = self.node(id);
            queue.extend(node.left());
            queue.extend(node.right());
            ids.push(id);
        }
    }

    fn pre_ids(&self, ids: &mut Vec<NodeId>) {
        let mut stack: Vec<NodeId> = self.root_id().into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            ids.push(id);
            // Right first so the left subtree is popped first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Walks node, right, left and reverses the result, which is left, right, node.
    fn post_ids(&self, ids: &mut Vec<NodeId>) {
        let start = ids.len();
        let mut stack: Vec<NodeId> = self.root_id().into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            ids.push(id);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        ids[start..].reverse();
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sorted iterator over the keys of a [`Tree`], created by [`Tree::iter`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    /// Nodes whose key hasn't been yielded yet but whose left subtree has been.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut id: Option<NodeId>) {
        while let Some(current) = id {
            self.stack.push(current);
            id = self.tree.node(current).left();
        }
    }

    /// The next node in sorted order.
    fn next_id(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.node(id).right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(id)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_id().map(|id| tree.node(id).key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
