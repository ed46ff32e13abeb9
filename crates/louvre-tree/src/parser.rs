//! Parse entry point.

use louvre_parse::{BlockCollector, Node, ParserAction, Tag, TagHandler, TagRegistry};
use tracing::debug;

use crate::{ParseError, ParseOptions, Tree, TreeBuilder};

/// A parser over one source string.
///
/// Each parser owns its own copy of the tag registry. Bindings added with
/// [`Parser::add_tag_binding`] apply to every later call to
/// [`Parser::parse`] and may shadow the built-in tags.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    source: &'src str,
    registry: TagRegistry,
    options: ParseOptions,
}

impl<'src> Parser<'src> {
    /// Create a parser with the built-in tags and default options.
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'src str, options: ParseOptions) -> Self {
        Self::with_registry(source, TagRegistry::with_builtins(), options)
    }

    /// Create a parser with a prepared registry.
    pub fn with_registry(source: &'src str, registry: TagRegistry, options: ParseOptions) -> Self {
        Self {
            source,
            registry,
            options,
        }
    }

    /// Bind a tag name to a handler.
    pub fn add_tag_binding<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Tag) -> (ParserAction, Node) + Send + Sync + 'static,
    {
        self.registry.bind(name, TagHandler::custom(handler));
        self
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Parse the source into a tree, stopping at the first error.
    pub fn parse(&self) -> Result<Tree, ParseError> {
        let mut builder = TreeBuilder::new();
        for block in BlockCollector::new(self.source, &self.registry) {
            builder.apply(block?)?;
        }
        let tree = builder.finish(&self.options)?;
        debug!(nodes = tree.node_count(), balanced = tree.is_balanced(), "parsed document");
        Ok(tree)
    }
}
