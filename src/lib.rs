//! This crate exposes a Binary Search Tree (BST) that is allowed to become unbalanced and can be
//! rebalanced on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Built from a set of keys, the [`Tree`] has the
//! minimal height of `ceil(lg(N + 1)) - 1` where `N` is the number of nodes. Inserting and
//! deleting keep the BST invariants but not the height: inserting sorted keys makes a tree
//! as tall as a linked list. [`Tree::is_balanced`] reports whether that has happened and
//! [`Tree::rebalance`] rebuilds the tree from its sorted keys.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. The other classical walks are in [`traversal`].
//!
//! ```
//! use bst_rebalance::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//! assert!(tree.is_balanced());
//!
//! tree.insert(10);
//! tree.insert(11);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), [&1, &3, &4, &5, &7, &8, &9, &10, &11]);
//! ```

#![deny(missing_docs)]

mod error;
pub mod node;
mod pretty;
pub mod traversal;
pub mod tree;

pub use error::Error;
pub use node::{Node, NodeId, Step};
pub use traversal::{Iter, Order};
pub use tree::Tree;
