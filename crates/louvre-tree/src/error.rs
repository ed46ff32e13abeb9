//! Tree construction errors.

use std::fmt;

use louvre_parse::{BlockError, Node, SyntaxError, TagError};

/// Kind of node error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeErrorKind {
    /// `End` while the current branch is the root.
    UnexpectedEnd,
    /// Input ended with a branch still open (strict mode only).
    UnclosedBranch,
}

/// A structural error while building the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeError {
    pub kind: NodeErrorKind,
    /// The node that triggered the error.
    pub node: Node,
}

impl NodeError {
    pub fn new(kind: NodeErrorKind, node: Node) -> Self {
        Self { kind, node }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            NodeErrorKind::UnexpectedEnd => "Unexpected branch return at root level",
            NodeErrorKind::UnclosedBranch => "Unclosed branch at end of input",
        }
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(tag) = self.node.tag() {
            write!(f, " (`{}` at {})", tag, tag.location())?;
        }
        Ok(())
    }
}

impl std::error::Error for NodeError {}

/// Any error that stops a parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Syntax(SyntaxError),
    Tag(TagError),
    Node(NodeError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(e) => write!(f, "syntax error: {}", e),
            ParseError::Tag(e) => write!(f, "tag error: {}", e),
            ParseError::Node(e) => write!(f, "node error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Syntax(e) => Some(e),
            ParseError::Tag(e) => Some(e),
            ParseError::Node(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

impl From<TagError> for ParseError {
    fn from(e: TagError) -> Self {
        ParseError::Tag(e)
    }
}

impl From<NodeError> for ParseError {
    fn from(e: NodeError) -> Self {
        ParseError::Node(e)
    }
}

impl From<BlockError> for ParseError {
    fn from(e: BlockError) -> Self {
        match e {
            BlockError::Syntax(e) => ParseError::Syntax(e),
            BlockError::Tag(e) => ParseError::Tag(e),
        }
    }
}
