//! Tree model and the recursive rendering strategy.
//!
//! Nodes own their children, so a `TreeNode` is always a finite, acyclic tree
//! with exactly one root. Rendering never mutates a node.

use std::fmt;

use tracing::instrument;

use crate::domain::render::{Frame, Traversal};

/// A labelled tree node with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<L> {
    pub label: L,
    /// Left-to-right rendering order
    pub children: Vec<TreeNode<L>>,
}

impl<L> TreeNode<L> {
    /// Create a leaf node.
    pub fn new(label: L) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// Builder: replace the children of this node.
    pub fn with_children(mut self, children: Vec<TreeNode<L>>) -> Self {
        self.children = children;
        self
    }

    /// Builder: append one child.
    pub fn with_child(mut self, child: TreeNode<L>) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels; a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Labels of all leaves, left to right.
    pub fn leaf_labels(&self) -> Vec<&L> {
        if self.children.is_empty() {
            vec![&self.label]
        } else {
            let mut leaves = Vec::new();
            for child in &self.children {
                leaves.extend(child.leaf_labels());
            }
            leaves
        }
    }
}

impl<L: fmt::Display> TreeNode<L> {
    /// Render with the given traversal strategy, one line per node.
    pub fn render(&self, traversal: Traversal) -> Vec<String> {
        match traversal {
            Traversal::Recursive => self.render_recursive(),
            Traversal::Stack => self.render_stack(),
            Traversal::Queue => self.render_queue(),
        }
    }

    /// Pre-order rendering by plain recursion.
    #[instrument(level = "trace", skip_all)]
    pub fn render_recursive(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.node_count());
        visit(Frame::root(self), &mut lines);
        lines
    }
}

fn visit<L: fmt::Display>(frame: Frame<'_, L>, lines: &mut Vec<String>) {
    lines.push(frame.line());
    for child in frame.children() {
        visit(child, lines);
    }
}

/// Canonical pre-order rendering, lines joined by `\n`.
impl<L: fmt::Display> fmt::Display for TreeNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_recursive().join("\n"))
    }
}

/// Label of a decoded tree document: text, number or boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => write!(f, "{}", s),
            Label::Number(n) => match n.as_f64() {
                // Floats print like JavaScript numbers: `1.0` as `1`, `1e2` as `100`
                Some(x) if n.is_f64() && x == 0.0 => f.write_str("0"),
                Some(x) if n.is_f64() => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            Label::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Number(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      1
    //     / \
    //    2   5
    //   / \   \
    //  3   4   6
    fn sample() -> TreeNode<i32> {
        TreeNode::new(1).with_children(vec![
            TreeNode::new(2).with_children(vec![TreeNode::new(3), TreeNode::new(4)]),
            TreeNode::new(5).with_child(TreeNode::new(6)),
        ])
    }

    #[test]
    fn test_node_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.depth(), 3);
        assert_eq!(TreeNode::new("x").depth(), 1);
    }

    #[test]
    fn test_leaf_labels_are_left_to_right() {
        assert_eq!(sample().leaf_labels(), vec![&3, &4, &6]);
    }

    #[test]
    fn test_display_is_pre_order() {
        let expected = "└── 1\n    ├── 2\n    │   ├── 3\n    │   └── 4\n    └── 5\n        └── 6";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::from("root").to_string(), "root");
        assert_eq!(Label::from(42_i64).to_string(), "42");
        assert_eq!(Label::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_float_labels_print_like_javascript() {
        let number = |text: &str| Label::Number(serde_json::from_str(text).unwrap());
        assert_eq!(number("1.0").to_string(), "1");
        assert_eq!(number("1e2").to_string(), "100");
        assert_eq!(number("-0.0").to_string(), "0");
        assert_eq!(number("2.5").to_string(), "2.5");
        assert_eq!(number("0.1").to_string(), "0.1");
        assert_eq!(number("18446744073709551615").to_string(), "18446744073709551615");
    }
}
