//! Character cursor over Louvre source text.

use crate::SourceLocation;
use tracing::trace;

/// A forward-only cursor over source text.
///
/// The cursor tracks a byte position (for slicing), a character offset, and
/// the current line and column. Line tracking is explicit: consuming a
/// newline does not move to the next line until [`Cursor::advance_line`]
/// is called.
#[derive(Clone)]
pub struct Cursor<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: usize,
    /// Current character offset in `source`.
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Snapshot of the current location.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.offset)
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether at least `n + 1` characters remain.
    #[inline]
    pub fn can_advance(&self, n: usize) -> bool {
        self.peek(n).is_some()
    }

    /// Peek at the character `ahead` positions from the cursor without
    /// consuming anything.
    #[inline]
    pub fn peek(&self, ahead: usize) -> Option<char> {
        self.remaining.chars().nth(ahead)
    }

    /// Consume the current character and return it.
    #[inline]
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        let len = c.len_utf8();
        self.pos += len;
        self.remaining = &self.remaining[len..];
        self.offset += 1;
        self.column += 1;
        Some(c)
    }

    /// Consume up to `n` characters, returning how many were consumed.
    pub fn advance(&mut self, n: usize) -> usize {
        let mut consumed = 0;
        while consumed < n && self.consume().is_some() {
            consumed += 1;
        }
        consumed
    }

    /// Consume the current character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Move to the start of the next line.
    ///
    /// Call this right after consuming a newline character.
    #[inline]
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.column = 0;
        trace!(line = self.line, offset = self.offset, "advance line");
    }

    /// Skip whitespace, keeping line tracking in step with any newlines.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek(0) {
            if !c.is_whitespace() {
                break;
            }
            self.consume();
            if c == '\n' || c == '\r' {
                self.advance_line();
            }
        }
    }

    /// Collect a maximal run of tag characters (alphanumerics and `_`).
    ///
    /// The run may be empty.
    pub fn collect_sequence(&mut self) -> &'src str {
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            if !is_tag_char(c) {
                break;
            }
            self.consume();
        }
        &self.source[start..self.pos]
    }
}

/// Check if a character can appear in a tag name or argument.
#[inline]
pub fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_peek_out_of_range() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(0), Some('a'));
        assert_eq!(cursor.peek(1), Some('b'));
        assert_eq!(cursor.peek(2), None);
        assert_eq!(Cursor::new("").peek(0), None);
    }

    #[test]
    fn test_can_advance() {
        let mut cursor = Cursor::new("abc");
        assert!(cursor.can_advance(0));
        assert!(cursor.can_advance(2));
        assert!(!cursor.can_advance(3));
        cursor.advance(3);
        assert!(!cursor.can_advance(0));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_consume_tracks_offset_and_column() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.consume(), Some('a'));
        assert_eq!(cursor.location(), SourceLocation::new(0, 1, 1));
        assert_eq!(cursor.consume(), Some('b'));
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.location(), SourceLocation::new(0, 2, 2));
    }

    #[test]
    fn test_advance_line_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance(3);
        cursor.advance_line();
        let loc = cursor.location();
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 0);
        assert_eq!(loc.offset, 3);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut cursor = Cursor::new("hello");
        let before = cursor.location();
        cursor.advance(4);
        assert_eq!(before, SourceLocation::start());
        assert_eq!(cursor.location().offset, 4);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("àè#");
        assert_eq!(cursor.advance(2), 2);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.location().offset, 2);
        assert_eq!(cursor.peek(0), Some('#'));
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(5), 2);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("(a");
        assert!(!cursor.eat(')'));
        assert!(cursor.eat('('));
        assert_eq!(cursor.peek(0), Some('a'));
    }

    #[test]
    fn test_collect_sequence() {
        let mut cursor = Cursor::new("center_2(x)");
        assert_eq!(cursor.collect_sequence(), "center_2");
        assert_eq!(cursor.peek(0), Some('('));
        assert_eq!(cursor.collect_sequence(), "");
    }

    #[test]
    fn test_collect_sequence_at_eof() {
        let mut cursor = Cursor::new("nonexistent");
        assert_eq!(cursor.collect_sequence(), "nonexistent");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_skip_whitespace_counts_lines() {
        let mut cursor = Cursor::new(" \n\t x");
        cursor.skip_whitespace();
        let loc = cursor.location();
        assert_eq!(cursor.peek(0), Some('x'));
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 2);
        assert_eq!(loc.offset, 4);
    }

    #[test]
    fn test_is_tag_char() {
        assert!(is_tag_char('a'));
        assert!(is_tag_char('Z'));
        assert!(is_tag_char('9'));
        assert!(is_tag_char('_'));
        assert!(is_tag_char('é'));
        assert!(!is_tag_char('#'));
        assert!(!is_tag_char('('));
        assert!(!is_tag_char(' '));
        assert!(!is_tag_char('-'));
    }
}
