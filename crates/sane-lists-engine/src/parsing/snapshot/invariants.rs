use crate::tree::{ITEM_TAG, NodeId, Tree, is_list_tag};

/// Validates the structure of a parsed tree.
///
/// Asserts that:
/// - Every child points back at the node that lists it
/// - List containers (`ol`/`ul`) only hold `li` children
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tree: &Tree) {
    check_node(tree, tree.root());
}

fn check_node(tree: &Tree, id: NodeId) {
    let node = tree.node(id);
    for &child in node.children() {
        assert_eq!(
            tree.node(child).parent(),
            Some(id),
            "child {child:?} of <{}> has a mismatched parent link",
            node.tag
        );
        if is_list_tag(&node.tag) {
            assert_eq!(
                tree.tag(child),
                ITEM_TAG,
                "list container <{}> holds a <{}> child",
                node.tag,
                tree.tag(child)
            );
        }
        check_node(tree, child);
    }
}
