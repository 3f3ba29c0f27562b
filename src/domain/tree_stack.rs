//! Explicit-stack traversals.
//!
//! The stack replaces the call stack of the recursive version. Children are
//! pushed in reverse so the leftmost one is popped first, which keeps the
//! left-to-right pre-order despite LIFO.

use std::fmt;

use tracing::instrument;

use crate::domain::render::Frame;
use crate::domain::tree::TreeNode;

impl<L: fmt::Display> TreeNode<L> {
    /// Pre-order rendering driven by an explicit stack of pending frames.
    #[instrument(level = "trace", skip_all)]
    pub fn render_stack(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.node_count());
        let mut stack = vec![Frame::root(self)];

        while let Some(frame) = stack.pop() {
            lines.push(frame.line());
            stack.extend(frame.children().rev());
        }

        lines
    }
}

impl<L> TreeNode<L> {
    /// Pre-order iterator over the nodes of this tree.
    pub fn iter(&self) -> PreOrderIter<'_, L> {
        PreOrderIter { stack: vec![self] }
    }
}

pub struct PreOrderIter<'a, L> {
    stack: Vec<&'a TreeNode<L>>,
}

impl<'a, L> Iterator for PreOrderIter<'a, L> {
    type Item = &'a TreeNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a, L> IntoIterator for &'a TreeNode<L> {
    type Item = &'a TreeNode<L>;
    type IntoIter = PreOrderIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
