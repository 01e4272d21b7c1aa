use std::fmt::Write;

use crate::tree::{NodeId, Tree};

/// Renders `tree` as an indented outline.
///
/// Each node is one line: two spaces per depth, the tag, its attributes as
/// `key="value"`, the inline text as a quoted string and the tail as
/// `tail="..."`. Empty text and tail are omitted. Quoting uses `Debug`, so
/// newlines show up as `\n`.
///
/// ```text
/// div
///   ol
///     li "a"
///     li "b"
///       ol start="3"
///         li "c"
/// ```
pub fn outline(tree: &Tree) -> String {
    let mut lines = Vec::new();
    write_node(tree, tree.root(), 0, &mut lines);
    lines.join("\n")
}

fn write_node(tree: &Tree, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let node = tree.node(id);
    let mut line = format!("{}{}", "  ".repeat(depth), node.tag);
    for (key, value) in &node.attrs {
        let _ = write!(line, " {key}={value:?}");
    }
    if !node.text.is_empty() {
        let _ = write!(line, " {:?}", node.text);
    }
    if !node.tail.is_empty() {
        let _ = write!(line, " tail={:?}", node.tail);
    }
    lines.push(line);

    for &child in node.children() {
        write_node(tree, child, depth + 1, lines);
    }
}
