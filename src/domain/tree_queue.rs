//! Explicit-queue (breadth-first) traversals.
//!
//! Same frame bookkeeping as the stack version, but a FIFO emits level by
//! level: every node at depth d is printed before any node at depth d+1.
//! Prefixes are still those of the node's own ancestry, so for deeper trees the
//! lines of sibling subtrees interleave.

use std::collections::VecDeque;
use std::fmt;

use tracing::instrument;

use crate::domain::render::Frame;
use crate::domain::tree::TreeNode;

impl<L: fmt::Display> TreeNode<L> {
    /// Level-order rendering driven by a FIFO queue of pending frames.
    #[instrument(level = "trace", skip_all)]
    pub fn render_queue(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.node_count());
        let mut queue = VecDeque::new();
        queue.push_back(Frame::root(self));

        while let Some(frame) = queue.pop_front() {
            lines.push(frame.line());
            queue.extend(frame.children());
        }

        lines
    }
}

impl<L> TreeNode<L> {
    /// Breadth-first iterator over the nodes of this tree.
    pub fn iter_level_order(&self) -> LevelOrderIter<'_, L> {
        LevelOrderIter {
            queue: VecDeque::from([self]),
        }
    }

    /// Number of nodes on each level, root level first.
    pub fn level_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((self, 0usize)); // (node, level)

        while let Some((node, level)) = queue.pop_front() {
            if widths.len() <= level {
                widths.push(0);
            }
            widths[level] += 1;
            for child in &node.children {
                queue.push_back((child, level + 1));
            }
        }

        widths
    }
}

pub struct LevelOrderIter<'a, L> {
    queue: VecDeque<&'a TreeNode<L>>,
}

impl<'a, L> Iterator for LevelOrderIter<'a, L> {
    type Item = &'a TreeNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children.iter());
        Some(node)
    }
}
