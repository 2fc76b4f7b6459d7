//! Drawing a [`Tree`] sideways for a terminal.
//!
//! The root sits on the left with its right subtree drawn above it and its left subtree below:
//!
//! ```text
//! │       ┌── 9
//! │   ┌── 8
//! │   │   └── 7
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 1
//! ```

use std::fmt;

use crate::node::NodeId;
use crate::Tree;

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root_id() else {
            return Ok(());
        };

        // `segments[..depth]` is the prefix of the line for a node at `depth`. A frame only ever
        // truncates to its own depth, so ancestors' segments survive their descendants.
        let mut segments: Vec<&str> = Vec::new();
        let mut stack = vec![Frame::Visit {
            id: root,
            depth: 0,
            is_left: true,
            segment: "",
        }];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit {
                    id,
                    depth,
                    is_left,
                    segment,
                } => {
                    if depth > 0 {
                        segments.truncate(depth - 1);
                        segments.push(segment);
                    }
                    let node = self.node(id);

                    // Pushed in reverse: the right subtree is drawn above the node, the left below.
                    if let Some(left) = node.left() {
                        stack.push(Frame::Visit {
                            id: left,
                            depth: depth + 1,
                            is_left: true,
                            segment: if is_left { "    " } else { "│   " },
                        });
                    }
                    stack.push(Frame::Line { id, depth, is_left });
                    if let Some(right) = node.right() {
                        stack.push(Frame::Visit {
                            id: right,
                            depth: depth + 1,
                            is_left: false,
                            segment: if is_left { "│   " } else { "    " },
                        });
                    }
                }
                Frame::Line { id, depth, is_left } => {
                    segments.truncate(depth);
                    for segment in &segments {
                        f.write_str(segment)?;
                    }
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}", branch, self.node(id).key())?;
                }
            }
        }
        Ok(())
    }
}

enum Frame {
    /// Schedule a node's subtrees and its own line.
    Visit {
        id: NodeId,
        depth: usize,
        is_left: bool,
        /// What this node adds to its parent's prefix.
        segment: &'static str,
    },
    /// Write a node's line.
    Line {
        id: NodeId,
        depth: usize,
        is_left: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_balanced_tree() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
        let expected = "\
│       ┌── 9
│   ┌── 8
│   │   └── 7
└── 5
    │   ┌── 4
    └── 3
        └── 1
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_right_spine() {
        let mut tree = Tree::new();
        for key in 1..=3 {
            tree.insert(key);
        }
        let expected = "\
│       ┌── 3
│   ┌── 2
└── 1
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_left_spine_under_right_child() {
        let mut tree = Tree::new();
        for key in [5, 9, 8, 7] {
            tree.insert(key);
        }
        let expected = "\
│   ┌── 9
│   │   └── 8
│   │       └── 7
└── 5
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_deep_tree() {
        let mut tree = Tree::new();
        for key in (0..4_000).rev() {
            tree.insert(key);
        }
        let drawing = tree.to_string();

        assert_eq!(drawing.lines().count(), 4_000);
        assert_eq!(drawing.lines().next(), Some("└── 3999"));
        assert!(drawing.ends_with("└── 0\n"));
    }

    #[test]
    fn draws_nothing_for_empty_tree() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }
}
