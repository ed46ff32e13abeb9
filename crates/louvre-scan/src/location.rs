//! Location tracking for source positions.

use std::fmt;

/// A position in the source text.
///
/// Locations are plain values: taking one from a [`Cursor`](crate::Cursor)
/// copies the current position, and advancing the cursor afterwards leaves
/// it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct SourceLocation {
    /// Line number (0-based).
    pub line: usize,
    /// Column within the line (0-based, in characters).
    pub column: usize,
    /// Character offset from the start of the source.
    pub offset: usize,
}

impl SourceLocation {
    /// Create a new location.
    #[inline]
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The location of the first character of a source.
    #[inline]
    pub fn start() -> Self {
        Self::default()
    }

    /// A character range of `len` characters starting here.
    #[inline]
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        self.offset..self.offset + len
    }
}

impl fmt::Display for SourceLocation {
    /// Formats as `line:column`, both 1-based, the way editors show them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
