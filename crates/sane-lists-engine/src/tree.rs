//! # Output Tree
//!
//! An arena of element nodes, shaped like an XML element tree: every node has
//! a tag, attributes, leading `text` and trailing `tail` text. Nodes are
//! addressed by [`NodeId`] and never removed, so ids stay valid for the life
//! of the tree.

use std::collections::BTreeMap;

/// Tag of the document root.
pub const ROOT_TAG: &str = "div";
/// Tag of a paragraph node.
pub const PARAGRAPH_TAG: &str = "p";
/// Tag of a list item node.
pub const ITEM_TAG: &str = "li";
/// Tags of list container nodes.
pub const LIST_TAGS: [&str; 2] = ["ol", "ul"];

/// Returns true for `ol` and `ul`.
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.contains(&tag)
}

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A single element of the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Element name (`ol`, `ul`, `li`, `p`, `div`, ...).
    pub tag: String,
    /// Attributes, kept sorted so dumps are deterministic.
    pub attrs: BTreeMap<String, String>,
    /// Inline text before the first child.
    pub text: String,
    /// Text after this node and before its next sibling.
    pub tail: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            text: String::new(),
            tail: String::new(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed element tree rooted at a `div`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::with_root(ROOT_TAG)
    }

    pub fn with_root(tag: &str) -> Self {
        Self {
            nodes: vec![Node::new(tag, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.0].children()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Creates a node with `tag` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.alloc(tag, parent);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Creates a node with `tag` at position `index` among `parent`'s children.
    ///
    /// An index past the end appends.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, tag: &str) -> NodeId {
        let id = self.alloc(tag, parent);
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, id);
        id
    }

    fn alloc(&mut self, tag: &str, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        id
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
