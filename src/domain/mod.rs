//! Domain layer: tree model, rendering and word counting
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod document;
pub mod error;
pub mod render;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod words;

pub use document::{decode_tree, NodeKeys, MAX_DEPTH};
pub use error::DomainError;
pub use render::{Order, Traversal};
pub use tree::{Label, TreeNode};
pub use tree_queue::LevelOrderIter;
pub use tree_stack::PreOrderIter;
pub use words::{tokenize, WordCounter, WordFrequencies};
