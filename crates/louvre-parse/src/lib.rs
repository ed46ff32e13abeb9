//! Block collector and tag dispatch for the Louvre markup language.
//!
//! [`BlockCollector`] scans source text into [`Block`]s: whitespace-normalized
//! runs of text, or nodes produced by resolving a `#tag(args)` invocation
//! through a [`TagRegistry`]. Each block carries the [`ParserAction`] that
//! tells a tree builder where the node goes.

pub use louvre_scan::{Cursor, SourceLocation, is_tag_char};

mod tag;
pub use tag::Tag;

mod node;
pub use node::{Node, NodeKind, ParserAction};

mod error;
pub use error::{BlockError, SyntaxError, SyntaxErrorKind, TagError, TagErrorKind};

mod registry;
pub use registry::{HandlerFn, TagHandler, TagRegistry};

mod collector;
pub use collector::{Block, BlockCollector};
