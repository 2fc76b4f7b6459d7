//! A rebalanceable BST. Nodes live in an arena owned by the `Tree` and refer to their children
//! by [`NodeId`]. The tree never balances itself; [`Tree::rebalance`] rebuilds it on request.
//!
//! # Examples
//!
//! ```
//! use bst_rebalance::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(5));
//!
//! // Inserting in ascending order makes a long right spine.
//! for x in 10..20 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! // Deleting returns the removed key.
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert!(tree.delete(&5).is_err());
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::Error;
use crate::node::{Node, NodeId, Step};
use crate::traversal::Order;

/// A Binary Search Tree of unique keys. See the [module docs][self] for an overview.
#[derive(Clone)]
pub struct Tree<K> {
    /// Node arena. A `None` slot has been vacated by a deletion and is listed in `free`.
    nodes: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root().map(Node::key))
            .field("level_order", &self.level_order())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Builds a tree of minimal height holding every distinct value of `values`.
    ///
    /// The values are sorted and deduplicated, then the middle one (index `len / 2`) becomes the
    /// root and the values on either side of it are built into its subtrees the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert_eq!(tree.in_order(), [&1, &2, &3]);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = values.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let mut tree = Self::new();
        tree.fill_sorted(keys);
        debug!(
            "built tree of {} nodes with height {:?}",
            tree.len,
            tree.tree_height()
        );
        tree
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.map(|id| self.node(id))
    }

    /// Resolves a handle obtained from one of this tree's nodes. Returns `None` if the node has
    /// since been deleted.
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    /// Potentially finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.find_id(key).map(|id| self.node(id))
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find_id(key).is_some()
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if the key is
    /// already present. No rebalancing is done.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            trace!("inserting root");
            self.root = Some(self.alloc(key));
            return true;
        };

        loop {
            match self.node(current).navigate(&key) {
                Step::Here => {
                    trace!("ignoring duplicate insert");
                    return false;
                }
                Step::Left(Some(next)) | Step::Right(Some(next)) => current = next,
                Step::Left(None) => {
                    let id = self.alloc(key);
                    self.node_mut(current).left = Some(id);
                    return true;
                }
                Step::Right(None) => {
                    let id = self.alloc(key);
                    self.node_mut(current).right = Some(id);
                    return true;
                }
            }
        }
    }

    /// Deletes the node holding `key` and returns the key. If the tree doesn't contain the key,
    /// nothing changes and [`Error::NotFound`] is returned.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::{Error, Tree};
    ///
    /// let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(tree.delete(&5), Ok(5));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(7));
    /// assert_eq!(tree.delete(&5), Err(Error::NotFound));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K, Error>
    where
        K: Ord,
    {
        let id = self.find_id(key).ok_or(Error::NotFound)?;
        self.unlink(id);
        let removed = self.release(id);

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
        Ok(removed)
    }

    /// Number of edges on the longest downward path from `node` to a leaf. A leaf has height 0.
    pub fn height(&self, node: &Node<K>) -> usize {
        self.levels(node.left).max(self.levels(node.right))
    }

    /// Height of the root, or `None` for an empty tree.
    pub fn tree_height(&self) -> Option<usize> {
        self.root().map(|root| self.height(root))
    }

    /// The height of the root minus the height of `node`.
    ///
    /// This is the number of edges from the root to `node` when `node` lies on a longest path
    /// from the root. Elsewhere it is larger than that distance.
    pub fn depth(&self, node: &Node<K>) -> usize {
        self.tree_height()
            .unwrap_or(0)
            .saturating_sub(self.height(node))
    }

    /// Whether the heights of the left and right subtrees of every node differ by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.balanced_levels(self.root).is_some()
    }

    /// Rebuilds the tree into minimal height from its sorted keys. All existing [`NodeId`]s are
    /// invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebalance::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.tree_height(), Some(6));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.tree_height(), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn rebalance(&mut self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
        let order = self.node_ids(Order::In);
        let mut nodes = std::mem::take(&mut self.nodes);
        let keys = order
            .into_iter()
            .map(|id| {
                nodes[id.index()]
                    .take()
                    .expect("in-order walk only yields live nodes")
                    .key
            })
            .collect();

        self.free.clear();
        self.root = None;
        self.len = 0;
        self.fill_sorted(keys);
        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
        debug!(
            "rebalanced tree of {} nodes to height {:?}",
            self.len,
            self.tree_height()
        );
    }

    /// Resolves a handle that is known to be live.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        self.get(id).expect("NodeId refers to a live node")
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.nodes[id.index()]
            .as_mut()
            .expect("NodeId refers to a live node")
    }

    fn alloc(&mut self, key: K) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.index()] = Some(Node::new(key));
                id
            }
            None => {
                self.nodes.push(Some(Node::new(key)));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Vacates the slot of an already unlinked node and hands back its key.
    fn release(&mut self, id: NodeId) -> K {
        let node = self.nodes[id.index()]
            .take()
            .expect("released node is live");
        self.free.push(id);
        self.len -= 1;
        node.key
    }

    /// Replaces the contents of an empty tree with `keys`, which must be sorted and unique.
    fn fill_sorted(&mut self, keys: Vec<K>) {
        let len = keys.len();
        self.nodes.reserve(len);
        self.root = self.build_sorted(&mut keys.into_iter(), len);
    }

    /// Builds a subtree from the next `len` keys, consuming them in order: the left subtree gets
    /// the first `len / 2`, the subtree root gets the one after that and the right subtree gets
    /// the rest.
    fn build_sorted<I>(&mut self, keys: &mut I, len: usize) -> Option<NodeId>
    where
        I: Iterator<Item = K>,
    {
        if len == 0 {
            return None;
        }

        let middle = len / 2;
        let left = self.build_sorted(keys, middle);
        let id = self.alloc(keys.next().expect("sorted keys hold `len` items"));
        let right = self.build_sorted(keys, len - middle - 1);

        let node = self.node_mut(id);
        node.left = left;
        node.right = right;
        Some(id)
    }

    pub(crate) fn find_id(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut current = self.root?;
        loop {
            match self.node(current).navigate(key) {
                Step::Here => return Some(current),
                Step::Left(next) | Step::Right(next) => current = next?,
            }
        }
    }

    /// Returns the parent of the node holding `key`. If `key` is at the root, the root is
    /// returned. If `key` isn't in the tree, `None` is returned.
    fn find_parent(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut parent = self.root?;
        loop {
            let child = match self.node(parent).navigate(key) {
                Step::Here => return Some(parent),
                Step::Left(child) | Step::Right(child) => child?,
            };
            if self.node(child).key == *key {
                return Some(parent);
            }
            parent = child;
        }
    }

    /// Detaches the node `id` from the tree without freeing its slot. The node's key must be
    /// reachable from the root.
    fn unlink(&mut self, id: NodeId)
    where
        K: Ord,
    {
        let parent = self
            .find_parent(&self.node(id).key)
            .expect("linked node is reachable from the root");

        match self.node(id).child_count() {
            0 => {
                trace!("unlinking leaf");
                self.unlink_leaf(id, parent);
            }
            1 => {
                trace!("unlinking node with one child");
                self.unlink_with_child(id, parent);
            }
            _ => {
                trace!("unlinking node with two children");
                self.unlink_with_children(id, parent);
            }
        }
    }

    fn unlink_leaf(&mut self, id: NodeId, parent: NodeId)
    where
        K: Ord,
    {
        if id == parent {
            self.root = None;
        } else if self.node(id) < self.node(parent) {
            self.node_mut(parent).left = None;
        } else {
            self.node_mut(parent).right = None;
        }
    }

    fn unlink_with_child(&mut self, id: NodeId, parent: NodeId)
    where
        K: Ord,
    {
        let node = self.node(id);
        let child = if node.right.is_none() {
            node.left
        } else {
            node.right
        };
        self.replace(id, parent, child);
    }

    /// Splices the in-order successor of `id` into its place. The successor is unlinked first,
    /// which may change `id`'s right child, so the children are read afterwards.
    fn unlink_with_children(&mut self, id: NodeId, parent: NodeId)
    where
        K: Ord,
    {
        let right = self.node(id).right.expect("node has two children");
        let successor = self.lowest_child(right);
        self.unlink(successor);

        let node = self.node(id);
        let (left, right) = (node.left, node.right);

        self.replace(id, parent, Some(successor));
        let spliced = self.node_mut(successor);
        spliced.left = None;
        spliced.right = None;
        self.point_to(successor, right);
        self.point_to(successor, left);
    }

    /// Puts `with` where `id` hangs from `parent`, or at the root when `id` is the root.
    fn replace(&mut self, id: NodeId, parent: NodeId, with: Option<NodeId>)
    where
        K: Ord,
    {
        if id == parent {
            self.root = with;
        } else {
            self.point_to(parent, with);
        }
    }

    /// Attaches `child` below `parent` on the side its key belongs. Nothing happens when there is
    /// no child.
    fn point_to(&mut self, parent: NodeId, child: Option<NodeId>)
    where
        K: Ord,
    {
        let Some(child) = child else {
            return;
        };

        if self.node(child) < self.node(parent) {
            self.node_mut(parent).left = Some(child);
        } else {
            self.node_mut(parent).right = Some(child);
        }
    }

    /// The leftmost node of the subtree rooted at `id`.
    fn lowest_child(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Number of levels in the subtree at `id`. An absent subtree has 0.
    fn levels(&self, id: Option<NodeId>) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = id.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = self.node(id);
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Number of levels in the subtree at `id` (0 for an absent subtree), or `None` if any node in
    /// it is unbalanced.
    ///
    /// Children are finished before their parent by walking post-order with an explicit stack, so
    /// a degenerate tree can't overflow the call stack. `levels` is indexed by arena slot.
    fn balanced_levels(&self, id: Option<NodeId>) -> Option<usize> {
        let Some(id) = id else {
            return Some(0);
        };
        let mut levels = vec![0; self.nodes.len()];
        let mut stack = vec![(id, false)];
        let level_of = |levels: &[usize], child: Option<NodeId>| {
            child.map_or(0, |child: NodeId| levels[child.index()])
        };

        while let Some((id, children_done)) = stack.pop() {
            let node = self.node(id);
            if children_done {
                let left = level_of(&levels, node.left);
                let right = level_of(&levels, node.right);
                if left.abs_diff(right) > 1 {
                    return None;
                }
                levels[id.index()] = left.max(right) + 1;
            } else {
                stack.push((id, true));
                stack.extend(node.left.map(|child| (child, false)));
                stack.extend(node.right.map(|child| (child, false)));
            }
        }
        Some(levels[id.index()])
    }

    /// Panics unless the in-order keys are strictly increasing, every live slot is reachable from
    /// the root and `len` counts them.
    fn assert_invariants(&self)
    where
        K: Ord,
    {
        let ids = self.node_ids(Order::In);
        assert_eq!(ids.len(), self.len, "len counts the reachable nodes");
        assert_eq!(
            self.nodes.len() - self.free.len(),
            self.len,
            "every vacated slot is on the free list"
        );
        assert!(
            ids.windows(2).all(|w| self.node(w[0]) < self.node(w[1])),
            "in-order keys are strictly increasing"
        );
    }
}
