//! Decoding of JSON tree documents.
//!
//! A document is one JSON object per node:
//!
//! ```text
//! {"name": 1, "items": [{"name": 2}, {"name": 3}]}
//! ```
//!
//! Key names are configurable. An absent, `null` or `false` children value
//! means "no children".

use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::tree::{Label, TreeNode};

/// Key names used to read a node object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeKeys {
    pub label: String,
    pub children: String,
}

impl Default for NodeKeys {
    fn default() -> Self {
        Self {
            label: "name".into(),
            children: "items".into(),
        }
    }
}

impl NodeKeys {
    pub fn new(label: impl Into<String>, children: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: children.into(),
        }
    }
}

/// Deepest tree a document may describe; the root is level 1.
pub const MAX_DEPTH: usize = 256;

/// Decode a JSON value into a tree.
pub fn decode_tree(value: &Value, keys: &NodeKeys) -> Result<TreeNode<Label>, DomainError> {
    decode_node(value, keys, "root".to_string(), 1)
}

fn decode_node(
    value: &Value,
    keys: &NodeKeys,
    path: String,
    level: usize,
) -> Result<TreeNode<Label>, DomainError> {
    if level > MAX_DEPTH {
        return Err(DomainError::TooDeep {
            path,
            max: MAX_DEPTH,
        });
    }

    let object = value.as_object().ok_or_else(|| DomainError::NotAnObject {
        path: path.clone(),
        found: kind(value),
    })?;

    let label = match object.get(&keys.label) {
        None | Some(Value::Null) => {
            return Err(DomainError::MissingLabel {
                path,
                key: keys.label.clone(),
            })
        }
        Some(Value::String(s)) => Label::Text(s.clone()),
        Some(Value::Number(n)) => Label::Number(n.clone()),
        Some(Value::Bool(b)) => Label::Bool(*b),
        Some(other) => {
            return Err(DomainError::InvalidLabel {
                path,
                found: kind(other),
            })
        }
    };

    let children = match object.get(&keys.children) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_node(item, keys, format!("{}/{}", path, i), level + 1))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(DomainError::InvalidChildren {
                path,
                key: keys.children.clone(),
                found: kind(other),
            })
        }
    };

    Ok(TreeNode { label, children })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_mixed_labels() {
        let doc = json!({"name": 1, "items": [{"name": "two"}, {"name": true, "items": null}]});
        let tree = decode_tree(&doc, &NodeKeys::default()).unwrap();
        assert_eq!(tree.label, Label::from(1_i64));
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].label, Label::from("two"));
        assert_eq!(tree.children[1].label, Label::Bool(true));
        assert!(tree.children[1].is_leaf());
    }

    #[test]
    fn test_decode_custom_keys() {
        let doc = json!({"label": "a", "children": [{"label": "b"}]});
        let tree = decode_tree(&doc, &NodeKeys::new("label", "children")).unwrap();
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_false_children_means_leaf() {
        let doc = json!({"name": "x", "items": false});
        assert!(decode_tree(&doc, &NodeKeys::default()).unwrap().is_leaf());
    }

    #[test]
    fn test_errors_carry_node_path() {
        let keys = NodeKeys::default();

        let err = decode_tree(&json!({"name": 1, "items": [{"name": 2}, {"items": []}]}), &keys)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingLabel {
                path: "root/1".into(),
                key: "name".into()
            }
        );

        let err = decode_tree(&json!({"name": 1, "items": "abc"}), &keys).unwrap_err();
        assert!(matches!(err, DomainError::InvalidChildren { found: "string", .. }));

        let err = decode_tree(&json!({"name": [1]}), &keys).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLabel { found: "array", .. }));

        let err = decode_tree(&json!([1, 2]), &keys).unwrap_err();
        assert_eq!(err.to_string(), "node at root is not an object (found array)");
    }

    fn chain(levels: usize) -> Value {
        let mut node = json!({"name": levels});
        for level in (1..levels).rev() {
            node = json!({"name": level, "items": [node]});
        }
        node
    }

    #[test]
    fn test_depth_limit() {
        let keys = NodeKeys::default();
        assert_eq!(decode_tree(&chain(MAX_DEPTH), &keys).unwrap().depth(), MAX_DEPTH);

        let err = decode_tree(&chain(MAX_DEPTH + 1), &keys).unwrap_err();
        assert!(matches!(err, DomainError::TooDeep { max: MAX_DEPTH, .. }));
    }
}
