//! Node templates and parser actions.

use std::fmt;
use std::sync::Arc;

use crate::Tag;

/// What a tree builder should do with a block's node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserAction {
    /// Close the current branch and return to its parent.
    End,
    /// Append the node to the current branch.
    AddChild,
    /// Append the node, then make it the current branch.
    AddChildAndBranch,
    /// Drop the block.
    Ignore,
}

/// The kind of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Left,
    Center,
    Right,
    Justify,
    Paragraph,
    Numbers,
    Bullets,
    Item,
    Text,
    LineBreak,
    Null,
    Group,
    /// A kind introduced by a custom tag handler.
    Custom(String),
}

impl NodeKind {
    /// Create a custom kind.
    pub fn custom(name: impl Into<String>) -> Self {
        NodeKind::Custom(name.into())
    }

    /// Name of this kind. Custom kinds return their own name.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Left => "Left",
            NodeKind::Center => "Center",
            NodeKind::Right => "Right",
            NodeKind::Justify => "Justify",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Numbers => "Numbers",
            NodeKind::Bullets => "Bullets",
            NodeKind::Item => "Item",
            NodeKind::Text => "Text",
            NodeKind::LineBreak => "LineBreak",
            NodeKind::Null => "Null",
            NodeKind::Group => "Group",
            NodeKind::Custom(name) => name,
        }
    }

    /// Whether this is one of the standard kinds.
    #[inline]
    pub fn is_standard(&self) -> bool {
        !matches!(self, NodeKind::Custom(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Custom(name) => write!(f, "Custom({})", name),
            other => f.write_str(other.name()),
        }
    }
}

/// A node that is not (yet) part of a tree.
///
/// Tag handlers return these as templates; the tree builder moves them into
/// its arena once the block's action is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    text: Option<String>,
    tag: Option<Arc<Tag>>,
}

impl Node {
    /// Create a node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            tag: None,
        }
    }

    /// Create a root node.
    pub fn root() -> Self {
        Self::new(NodeKind::Root)
    }

    /// Create a text node.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(text.into()),
            tag: None,
        }
    }

    /// Create a node of a custom kind.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(NodeKind::custom(name))
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Literal text, present only on text nodes.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The tag that produced this node.
    #[inline]
    pub fn tag(&self) -> Option<&Arc<Tag>> {
        self.tag.as_ref()
    }

    /// Attach the originating tag, replacing any previous one.
    pub fn set_tag(&mut self, tag: Arc<Tag>) {
        self.tag = Some(tag);
    }

    /// Builder form of [`Node::set_tag`].
    pub fn with_tag(mut self, tag: Arc<Tag>) -> Self {
        self.set_tag(tag);
        self
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Node::new(kind)
    }
}
