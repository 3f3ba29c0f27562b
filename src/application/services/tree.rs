//! Tree rendering service
//!
//! Loads tree documents, renders them with a traversal strategy and
//! emits the lines to a sink.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt, JsonResultExt};
use crate::domain::{decode_tree, Label, NodeKeys, Traversal, TreeNode};
use crate::infrastructure::traits::{FileSystem, LineSink};

/// Path argument meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Service for loading and rendering trees.
pub struct TreeService {
    fs: Arc<dyn FileSystem>,
    keys: NodeKeys,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(fs: Arc<dyn FileSystem>, keys: NodeKeys) -> Self {
        Self { fs, keys }
    }

    pub fn keys(&self) -> &NodeKeys {
        &self.keys
    }

    /// Load a tree document from a JSON file.
    pub fn load(&self, path: &Path) -> ApplicationResult<TreeNode<Label>> {
        debug!("load: path={}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read tree document", path)?;
        self.parse(&content, &path.display().to_string())
    }

    /// Parse a tree document. `origin` names the source in error messages.
    pub fn parse(&self, content: &str, origin: &str) -> ApplicationResult<TreeNode<Label>> {
        let value = parse_json(content).with_document(origin)?;
        let decoded = decode_tree(&value, &self.keys);
        dismantle(value);
        let tree = decoded?;
        debug!(
            "parse: origin={} nodes={} depth={}",
            origin,
            tree.node_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Render a tree to lines.
    pub fn render(&self, tree: &TreeNode<Label>, traversal: Traversal) -> Vec<String> {
        debug!("render: traversal={} order={:?}", traversal, traversal.order());
        tree.render(traversal)
    }

    /// Render a tree and write every line to `sink`. Returns the number of lines.
    pub fn print(
        &self,
        tree: &TreeNode<Label>,
        traversal: Traversal,
        sink: &mut dyn LineSink,
    ) -> ApplicationResult<usize> {
        let lines = self.render(tree, traversal);
        for line in &lines {
            sink.write_line(line).with_context("write tree line")?;
        }
        sink.flush().with_context("flush tree output")?;
        Ok(lines.len())
    }
}

/// Parse without serde_json's fixed nesting limit; each tree level costs two
/// levels of JSON nesting. Depth is bounded later by [`decode_tree`].
fn parse_json(content: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Drop a JSON value with an explicit stack instead of recursive drop glue.
fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}
