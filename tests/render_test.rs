//! Rendering properties shared by all traversal strategies.

use rstest::rstest;

use rstree::domain::render::{CONNECTOR_LAST, CONNECTOR_TEE, INDENT_LAST, INDENT_PIPE};
use rstree::domain::{Order, Traversal, TreeNode};
use rstree::util::testing::{complete_tree, init_test_setup, lettered_tree, numbered_tree};

/// Trees with zero, one and many children per node and uneven depths.
fn assorted_trees() -> Vec<TreeNode<String>> {
    let s = |l: &str| TreeNode::new(l.to_string());
    vec![
        s("solo"),
        s("a").with_child(s("b")),
        s("a").with_child(s("b").with_child(s("c").with_child(s("d")))),
        s("a").with_children(vec![s("b"), s("c"), s("d"), s("e")]),
        s("a").with_children(vec![
            s("b"),
            s("c").with_children(vec![s("c1"), s("c2").with_child(s("c2x"))]),
            s("d").with_child(s("d1")),
        ]),
        s("a").with_children(vec![
            s("b").with_child(s("b1").with_child(s("b2"))),
            s("c"),
        ]),
        complete_tree(4, 3),
        complete_tree(2, 7),
        complete_tree(6, 2),
    ]
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Stack)]
#[case(Traversal::Queue)]
fn given_single_node_when_rendering_then_emits_one_last_connector_line(
    #[case] traversal: Traversal,
) {
    init_test_setup();
    let tree = TreeNode::new("root");
    assert_eq!(tree.render(traversal), vec!["└── root"]);
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Stack)]
#[case(Traversal::Queue)]
fn given_two_children_when_rendering_then_tee_then_last(#[case] traversal: Traversal) {
    let tree = TreeNode::new(1).with_children(vec![TreeNode::new(2), TreeNode::new(3)]);
    assert_eq!(
        tree.render(traversal),
        vec!["└── 1", "    ├── 2", "    └── 3"]
    );
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Stack)]
fn given_three_levels_when_rendering_pre_order_then_subtrees_complete_in_turn(
    #[case] traversal: Traversal,
) {
    let expected = "\
└── 1
    ├── 2
    │   ├── 3
    │   └── 4
    └── 5
        └── 6";
    assert_eq!(numbered_tree().render(traversal).join("\n"), expected);
}

#[test]
fn given_three_levels_when_rendering_with_queue_then_emits_level_by_level() {
    let lines = numbered_tree().render(Traversal::Queue);
    assert_eq!(
        lines,
        vec![
            "└── 1",
            "    ├── 2",
            "    └── 5",
            "    │   ├── 3",
            "    │   └── 4",
            "        └── 6",
        ]
    );
}

#[test]
fn given_multi_branch_tree_when_rendering_then_prefixes_and_connectors_follow_ancestry() {
    let lines = lettered_tree().render_recursive();

    let expected = [
        ("", CONNECTOR_LAST, "A"),
        (INDENT_LAST, CONNECTOR_TEE, "B"),
        ("    │   ", CONNECTOR_TEE, "C"),
        ("    │   ", CONNECTOR_LAST, "D"),
        (INDENT_LAST, CONNECTOR_LAST, "E"),
    ];
    assert_eq!(lines.len(), expected.len());
    for (line, (prefix, connector, label)) in lines.iter().zip(expected) {
        assert_eq!(line, &format!("{}{}{}", prefix, connector, label));
    }
    assert_eq!(format!("{}{}", INDENT_LAST, INDENT_PIPE), "    │   ");
}

#[test]
fn given_any_tree_when_rendering_recursive_and_stack_then_output_is_identical() {
    for tree in assorted_trees() {
        assert_eq!(
            tree.render_recursive(),
            tree.render_stack(),
            "strategies diverge for tree rooted at {}",
            tree.label
        );
    }
}

#[test]
fn given_deep_multi_branch_tree_when_rendering_with_queue_then_differs_from_pre_order() {
    let tree = numbered_tree();
    assert!(tree.depth() >= 3 && tree.children.len() > 1);

    let pre_order = tree.render(Traversal::Recursive);
    let level_order = tree.render(Traversal::Queue);
    assert_ne!(pre_order, level_order);

    // Same lines, different order
    let mut a = pre_order.clone();
    let mut b = level_order.clone();
    a.sort();
    b.sort();
    assert_eq!(a, b);

    assert_eq!(Traversal::Recursive.order(), Order::PreOrder);
    assert_eq!(Traversal::Queue.order(), Order::LevelOrder);
}

#[test]
fn given_shallow_tree_when_rendering_with_queue_then_matches_pre_order() {
    // Depth two: level order and pre-order coincide
    let tree = complete_tree(2, 5);
    assert_eq!(tree.render_queue(), tree.render_recursive());
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Stack)]
#[case(Traversal::Queue)]
fn given_any_tree_when_rendering_then_line_count_equals_node_count(#[case] traversal: Traversal) {
    for tree in assorted_trees() {
        assert_eq!(tree.render(traversal).len(), tree.node_count());
    }
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Stack)]
#[case(Traversal::Queue)]
fn given_unmodified_tree_when_rendering_twice_then_output_is_identical(
    #[case] traversal: Traversal,
) {
    let tree = complete_tree(4, 3);
    let before = tree.clone();
    assert_eq!(tree.render(traversal), tree.render(traversal));
    assert_eq!(tree, before);
}

#[test]
fn given_tree_when_displayed_then_matches_recursive_rendering() {
    let tree = lettered_tree();
    assert_eq!(tree.to_string(), tree.render_recursive().join("\n"));
}

#[test]
fn given_tree_when_iterating_then_node_orders_match_render_orders() {
    let tree = numbered_tree();
    let pre: Vec<i64> = tree.iter().map(|n| n.label).collect();
    let level: Vec<i64> = tree.iter_level_order().map(|n| n.label).collect();
    assert_eq!(pre, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(level, vec![1, 2, 5, 3, 4, 6]);
    assert_eq!(tree.level_widths(), vec![1, 2, 3]);
}

#[test]
fn given_deep_chain_when_rendering_with_stack_then_prefix_grows_per_level() {
    let mut tree = TreeNode::new(0_usize);
    for depth in 1..200 {
        tree = TreeNode::new(depth).with_child(tree);
    }
    let lines = tree.render_stack();
    assert_eq!(lines.len(), 200);
    assert_eq!(lines[199], format!("{}└── 0", INDENT_LAST.repeat(199)));
    assert_eq!(lines, tree.render_recursive());
}
