//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe malformed tree documents.
/// `path` locates the offending node, e.g. `root/1/0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node at {path} is not an object (found {found})")]
    NotAnObject { path: String, found: &'static str },

    #[error("node at {path} has no '{key}' label")]
    MissingLabel { path: String, key: String },

    #[error("node at {path} has an invalid label (found {found})")]
    InvalidLabel { path: String, found: &'static str },

    #[error("node at {path} is nested deeper than {max} levels")]
    TooDeep { path: String, max: usize },

    #[error("node at {path} has '{key}' that is not a list (found {found})")]
    InvalidChildren {
        path: String,
        key: String,
        found: &'static str,
    },
}
