//! Scanning loop that turns source text into blocks.

use std::sync::Arc;

use tracing::trace;

use crate::{
    BlockError, Cursor, Node, ParserAction, SourceLocation, SyntaxError, SyntaxErrorKind, Tag,
    TagRegistry,
};

/// One unit of scanner output: a node and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub action: ParserAction,
    pub node: Node,
}

impl Block {
    pub fn new(action: ParserAction, node: Node) -> Self {
        Self { action, node }
    }

    /// A text block, always appended as a child.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ParserAction::AddChild, Node::from_text(text))
    }
}

/// Collects blocks from source text, resolving tags through a registry.
pub struct BlockCollector<'src, 'reg> {
    cursor: Cursor<'src>,
    registry: &'reg TagRegistry,
    /// Set once iteration hit an error.
    failed: bool,
}

impl<'src, 'reg> BlockCollector<'src, 'reg> {
    pub fn new(source: &'src str, registry: &'reg TagRegistry) -> Self {
        Self {
            cursor: Cursor::new(source),
            registry,
            failed: false,
        }
    }

    /// Current scan location.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.cursor.location()
    }

    /// Whether all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Collect the next block.
    ///
    /// Text is gathered until a tag starts or input ends; a pending text run
    /// is returned before the tag that ends it, leaving the `#` unconsumed
    /// for the next call. Returns `None` once nothing is left.
    pub fn next_block(&mut self) -> Option<Result<Block, BlockError>> {
        let mut buf = String::new();

        while let Some(c) = self.cursor.peek(0) {
            match c {
                '\t' => {
                    self.cursor.consume();
                }
                ' ' => {
                    push_space(&mut buf);
                    self.cursor.consume();
                }
                '\n' | '\r' => {
                    push_space(&mut buf);
                    self.cursor.consume();
                    self.cursor.advance_line();
                }
                // `##` escapes a literal `#`
                '#' if self.cursor.peek(1) == Some('#') => {
                    buf.push('#');
                    self.cursor.advance(2);
                }
                '#' => {
                    let text = buf.trim_matches(' ');
                    if !text.is_empty() {
                        return Some(Ok(self.emit_text(text)));
                    }
                    return Some(self.collect_tag_block());
                }
                _ => {
                    buf.push(c);
                    self.cursor.consume();
                }
            }
        }

        let text = buf.trim_matches(' ');
        if text.is_empty() {
            None
        } else {
            Some(Ok(self.emit_text(text)))
        }
    }

    fn emit_text(&self, text: &str) -> Block {
        trace!(%text, at = %self.cursor.location(), "text block");
        Block::text(text)
    }

    fn collect_tag_block(&mut self) -> Result<Block, BlockError> {
        let tag = Arc::new(self.collect_tag()?);
        trace!(%tag, at = %tag.location(), "tag block");
        Ok(self.registry.tag_to_node(tag)?)
    }

    /// Read a tag starting at the `#` under the cursor.
    fn collect_tag(&mut self) -> Result<Tag, SyntaxError> {
        self.cursor.consume();
        let location = self.cursor.location();
        let name = self.cursor.collect_sequence();
        let mut arguments = Vec::new();

        if !self.cursor.eat('(') {
            return Ok(Tag::new(name, arguments, location));
        }

        loop {
            self.cursor.skip_whitespace();
            let argument = self.cursor.collect_sequence();
            if !argument.is_empty() {
                arguments.push(argument.to_string());
            }

            match self.cursor.peek(0) {
                Some(',') => {
                    self.cursor.consume();
                }
                Some(')') => {
                    self.cursor.consume();
                    break;
                }
                Some(c) => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken(c),
                        self.cursor.location(),
                    ));
                }
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedEof,
                        self.cursor.location(),
                    ));
                }
            }
        }

        Ok(Tag::new(name, arguments, location))
    }
}

impl Iterator for BlockCollector<'_, '_> {
    type Item = Result<Block, BlockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let block = self.next_block();
        if matches!(block, Some(Err(_))) {
            self.failed = true;
        }
        block
    }
}

/// Append a space unless the buffer already ends with one.
fn push_space(buf: &mut String) {
    if !buf.ends_with(' ') {
        buf.push(' ');
    }
}
