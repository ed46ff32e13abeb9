//! Scanner and tag errors.

use std::fmt;
use std::sync::Arc;

use crate::{SourceLocation, Tag};

/// Kind of syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Input ended inside an argument list.
    UnexpectedEof,
    /// A character other than `,` or `)` followed an argument.
    UnexpectedToken(char),
}

/// A lexical error while reading a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub location: SourceLocation,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            SyntaxErrorKind::UnexpectedEof => "Unexpected EOF",
            SyntaxErrorKind::UnexpectedToken(_) => "Unexpected token",
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnexpectedEof => write!(f, "{}", self.message()),
            SyntaxErrorKind::UnexpectedToken(c) => write!(f, "{} {:?}", self.message(), c),
        }?;
        write!(f, " at {}", self.location)
    }
}

impl std::error::Error for SyntaxError {}

/// Kind of tag error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorKind {
    /// No handler is bound to the tag's name.
    UnknownTag,
}

/// A well-formed tag that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagError {
    pub kind: TagErrorKind,
    pub tag: Arc<Tag>,
}

impl TagError {
    pub fn new(kind: TagErrorKind, tag: Arc<Tag>) -> Self {
        Self { kind, tag }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            TagErrorKind::UnknownTag => "Unknown tag",
        }
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` at {}",
            self.message(),
            self.tag.name(),
            self.tag.location()
        )
    }
}

impl std::error::Error for TagError {}

/// Error produced while collecting a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    Syntax(SyntaxError),
    Tag(TagError),
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::Syntax(e) => write!(f, "syntax error: {}", e),
            BlockError::Tag(e) => write!(f, "tag error: {}", e),
        }
    }
}

impl std::error::Error for BlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlockError::Syntax(e) => Some(e),
            BlockError::Tag(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for BlockError {
    fn from(e: SyntaxError) -> Self {
        BlockError::Syntax(e)
    }
}

impl From<TagError> for BlockError {
    fn from(e: TagError) -> Self {
        BlockError::Tag(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new(SyntaxErrorKind::UnexpectedEof, SourceLocation::new(0, 8, 8));
        assert_eq!(err.message(), "Unexpected EOF");
        assert_eq!(err.to_string(), "Unexpected EOF at 1:9");

        let err = SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken('-'),
            SourceLocation::new(1, 2, 5),
        );
        assert_eq!(err.message(), "Unexpected token");
        assert_eq!(err.to_string(), "Unexpected token '-' at 2:3");
    }

    #[test]
    fn test_tag_error_display() {
        let tag = Arc::new(Tag::new("bogus", Vec::new(), SourceLocation::new(0, 1, 1)));
        let err = TagError::new(TagErrorKind::UnknownTag, tag);
        assert_eq!(err.to_string(), "Unknown tag `bogus` at 1:2");
        assert_eq!(
            BlockError::from(err).to_string(),
            "tag error: Unknown tag `bogus` at 1:2"
        );
    }
}
