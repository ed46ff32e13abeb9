//! Document trees for the Louvre markup language.
//!
//! ```text
//! #center
//! THIS IS THE TITLE
//! #end
//! ```
//!
//! parses into a [`Tree`] whose root holds a `Center` node with one text
//! child. Use [`parse`] for the built-in tags, or [`Parser`] to bind extra
//! tags or change [`ParseOptions`].

mod builder;
mod diagnostic;
mod error;
mod options;
mod parser;
mod tree;

pub use builder::TreeBuilder;
pub use error::{NodeError, NodeErrorKind, ParseError};
pub use louvre_parse::{
    Block, BlockCollector, BlockError, Node, NodeKind, ParserAction, SourceLocation, SyntaxError,
    SyntaxErrorKind, Tag, TagError, TagErrorKind, TagHandler, TagRegistry,
};
pub use options::{ParseOptions, UnclosedBranches};
pub use parser::Parser;
pub use tree::{Descendants, NodeId, NodeRef, Tree};

/// Parse a document using the built-in tags.
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    Parser::new(source).parse()
}
