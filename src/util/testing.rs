//! Test support: one-time logging setup and shared tree fixtures.

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::TreeNode;

static TEST_SETUP: Once = Once::new();

/// Sample tree document using the default `name`/`items` keys.
pub const SAMPLE_DOCUMENT: &str = r#"{
    "name": 1,
    "items": [
        {
            "name": 2,
            "items": [{ "name": 3 }, { "name": 4 }]
        },
        {
            "name": 5,
            "items": [{ "name": 6 }]
        }
    ]
}"#;

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// `1(2(3, 4), 5(6))`, the tree of [`SAMPLE_DOCUMENT`].
pub fn numbered_tree() -> TreeNode<i64> {
    TreeNode::new(1).with_children(vec![
        TreeNode::new(2).with_children(vec![TreeNode::new(3), TreeNode::new(4)]),
        TreeNode::new(5).with_child(TreeNode::new(6)),
    ])
}

/// `A(B(C, D), E)`
pub fn lettered_tree() -> TreeNode<&'static str> {
    TreeNode::new("A").with_children(vec![
        TreeNode::new("B").with_children(vec![TreeNode::new("C"), TreeNode::new("D")]),
        TreeNode::new("E"),
    ])
}

/// Complete tree of the given depth where every inner node has `fanout` children.
/// Labels are dotted paths such as `r.0.1`.
pub fn complete_tree(depth: usize, fanout: usize) -> TreeNode<String> {
    fn build(label: String, remaining: usize, fanout: usize) -> TreeNode<String> {
        let children = if remaining <= 1 {
            Vec::new()
        } else {
            (0..fanout)
                .map(|i| build(format!("{}.{}", label, i), remaining - 1, fanout))
                .collect()
        };
        TreeNode::new(label).with_children(children)
    }
    build("r".to_string(), depth.max(1), fanout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }

    #[test]
    fn test_complete_tree_size() {
        // 1 + 3 + 9
        assert_eq!(complete_tree(3, 3).node_count(), 13);
        assert_eq!(complete_tree(0, 5).node_count(), 1);
    }
}
