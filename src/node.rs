//! The structural unit of a [`Tree`][crate::Tree].
//!
//! A `Node` owns its key and refers to its children by [`NodeId`] handles into the arena of the
//! tree that owns it. It never refers back to its parent.

use std::cmp::Ordering;

/// A handle to a node stored in a [`Tree`][crate::Tree]. Resolve it with
/// [`Tree::get`][crate::Tree::get].
///
/// Handles are only meaningful for the tree that produced them. Deleting a node invalidates its
/// handle and rebalancing invalidates every handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One step of a search starting at some node. See [`Node::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The target is this node's key.
    Here,
    /// The target is smaller, so it can only be in the left subtree (if there is one).
    Left(Option<NodeId>),
    /// The target is larger, so it can only be in the right subtree (if there is one).
    Right(Option<NodeId>),
}

/// A `Node` holds a key and up to two children. Every key in the left subtree is less than
/// `key` and every key in the right subtree is greater.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Construct a childless `Node` with the given `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The handle of the left child, if there is one.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The handle of the right child, if there is one.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// How many children this node has: 0, 1, or 2.
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Takes one step from this node towards `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::{Step, Tree};
    ///
    /// let tree = Tree::build([2, 1]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.navigate(&2), Step::Here);
    /// assert!(matches!(root.navigate(&1), Step::Left(Some(_))));
    /// assert_eq!(root.navigate(&3), Step::Right(None));
    /// ```
    pub fn navigate(&self, target: &K) -> Step
    where
        K: Ord,
    {
        match target.cmp(&self.key) {
            Ordering::Less => Step::Left(self.left),
            Ordering::Equal => Step::Here,
            Ordering::Greater => Step::Right(self.right),
        }
    }
}

impl<K: PartialEq> PartialEq for Node<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Node<K> {}

impl<K: PartialOrd> PartialOrd for Node<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord> Ord for Node<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
