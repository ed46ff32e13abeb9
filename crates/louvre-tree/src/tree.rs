//! Arena-backed document tree.

use std::fmt;
use std::sync::Arc;

use louvre_parse::{Node, NodeKind, Tag};

/// Index of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena (creation order).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    sibling_index: usize,
}

/// A document tree.
///
/// Nodes are owned by the tree and addressed by [`NodeId`]. Parent links are
/// set once, when a node is appended, and never change.
#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Slot>,
    head: NodeId,
}

const ROOT: NodeId = NodeId(0);

impl Tree {
    /// Create a tree holding only a root node.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                node: Node::root(),
                parent: None,
                children: Vec::new(),
                sibling_index: 0,
            }],
            head: ROOT,
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { tree: self, id: ROOT }
    }

    /// The node a parse finished on.
    ///
    /// This is the root unless the document left branches open.
    pub fn head(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.head,
        }
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub(crate) fn set_head(&mut self, id: NodeId) {
        self.head = id;
    }

    /// Whether the parse finished back at the root.
    pub fn is_balanced(&self) -> bool {
        self.head == ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.slots.len()).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Parent of `id`, if it has one.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    /// Append `node` as the last child of `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn append_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        let siblings = &mut self.slots[parent.0].children;
        let sibling_index = siblings.len();
        siblings.push(id);
        self.slots.push(Slot {
            node,
            parent: Some(parent),
            children: Vec::new(),
            sibling_index,
        });
        id
    }

    /// All nodes in pre-order, starting at the root.
    pub fn iter(&self) -> Descendants<'_> {
        self.root().descendants()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

/// A borrowed view of one node in a [`Tree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    fn slot(&self) -> &'a Slot {
        &self.tree.slots[self.id.0]
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node value.
    #[inline]
    pub fn node(&self) -> &'a Node {
        &self.slot().node
    }

    #[inline]
    pub fn kind(&self) -> &'a NodeKind {
        self.node().kind()
    }

    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        self.node().text()
    }

    #[inline]
    pub fn tag(&self) -> Option<&'a Arc<Tag>> {
        self.node().tag()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.slot().parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    pub fn is_root(&self) -> bool {
        self.slot().parent.is_none()
    }

    /// Children in order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + use<'a> {
        let tree = self.tree;
        self.slot()
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.slot().children.get(index).map(|&id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    pub fn child_count(&self) -> usize {
        self.slot().children.len()
    }

    /// How many children the parent had when this node was appended.
    pub fn sibling_index(&self) -> usize {
        self.slot().sibling_index
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.slot().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.tree.slots[id.0].parent;
        }
        depth
    }

    /// This node and everything below it, in pre-order.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            tree: self.tree,
            stack: vec![self.id],
        }
    }

    /// Compare kinds, texts and children recursively, ignoring tags.
    pub fn same_shape(&self, other: &NodeRef<'_>) -> bool {
        self.kind() == other.kind()
            && self.text() == other.text()
            && self.child_count() == other.child_count()
            && self
                .children()
                .zip(other.children())
                .all(|(a, b)| a.same_shape(&b))
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.kind(), width = indent * 2)?;
        if let Some(text) = self.text() {
            write!(f, " {:?}", text)?;
        }
        if let Some(tag) = self.tag()
            && !tag.arguments().is_empty()
        {
            write!(f, " [{}]", tag.arguments().join(", "))?;
        }
        writeln!(f)?;
        for child in self.children() {
            child.write_outline(f, indent + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .field("text", &self.text())
            .field("children", &self.child_count())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    /// Indented outline of this node and its descendants.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.slots[id.0].children.iter().rev().copied());
        Some(NodeRef {
            tree: self.tree,
            id,
        })
    }
}
