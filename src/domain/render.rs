//! Box-drawing line formatting shared by every traversal strategy.
//!
//! A line is `prefix + connector + label`. The root starts with an empty
//! prefix and counts as the last sibling; each level appends either
//! [`INDENT_LAST`] or [`INDENT_PIPE`] depending on whether the parent was
//! the last child of its own parent.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::tree::TreeNode;

/// Connector for the last child of a parent (and the root).
pub const CONNECTOR_LAST: &str = "└── ";
/// Connector for every child except the last.
pub const CONNECTOR_TEE: &str = "├── ";
/// Prefix extension below a node that was the last sibling.
pub const INDENT_LAST: &str = "    ";
/// Prefix extension below a node that has further siblings.
pub const INDENT_PIPE: &str = "│   ";

/// Order in which a traversal emits lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Parent, then each child subtree fully, left to right
    PreOrder,
    /// All nodes of depth d before any node of depth d+1
    LevelOrder,
}

/// Strategy used to walk the tree while rendering.
///
/// `Recursive` and `Stack` both emit pre-order and produce identical output.
/// `Queue` emits level-order, so its line sequence differs once a tree has more
/// than one branch reaching depth three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    #[default]
    Recursive,
    Stack,
    Queue,
}

impl Traversal {
    pub fn order(self) -> Order {
        match self {
            Traversal::Recursive | Traversal::Stack => Order::PreOrder,
            Traversal::Queue => Order::LevelOrder,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Traversal::Recursive => "recursive",
            Traversal::Stack => "stack",
            Traversal::Queue => "queue",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Traversal::Recursive),
            "stack" => Ok(Traversal::Stack),
            "queue" => Ok(Traversal::Queue),
            other => Err(format!(
                "unknown traversal '{}' (expected recursive, stack or queue)",
                other
            )),
        }
    }
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last {
        CONNECTOR_LAST
    } else {
        CONNECTOR_TEE
    }
}

pub fn indent(is_last: bool) -> &'static str {
    if is_last {
        INDENT_LAST
    } else {
        INDENT_PIPE
    }
}

/// Pending visit: a node plus the state inherited from its ancestors.
#[derive(Debug)]
pub(crate) struct Frame<'a, L> {
    pub node: &'a TreeNode<L>,
    pub prefix: String,
    pub is_last: bool,
}

impl<'a, L> Frame<'a, L> {
    pub fn root(node: &'a TreeNode<L>) -> Self {
        Self {
            node,
            prefix: String::new(),
            is_last: true,
        }
    }

    /// Frames for this node's children, left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Frame<'a, L>> {
        let node = self.node;
        let child_prefix = format!("{}{}", self.prefix, indent(self.is_last));
        let last_index = node.children.len().saturating_sub(1);
        node.children
            .iter()
            .enumerate()
            .map(move |(i, child)| Frame {
                node: child,
                prefix: child_prefix.clone(),
                is_last: i == last_index,
            })
    }
}

impl<L: fmt::Display> Frame<'_, L> {
    pub fn line(&self) -> String {
        format!("{}{}{}", self.prefix, connector(self.is_last), self.node.label)
    }
}
