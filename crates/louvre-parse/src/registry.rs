//! Tag name to handler bindings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::{Block, Node, NodeKind, ParserAction, Tag, TagError, TagErrorKind};

/// Signature of a custom tag handler.
pub type HandlerFn = dyn Fn(&Tag) -> (ParserAction, Node) + Send + Sync;

/// How a tag name is turned into a node.
#[derive(Clone)]
pub enum TagHandler {
    /// Fixed action and node kind; arguments are ignored.
    Builtin { action: ParserAction, kind: NodeKind },
    /// User-supplied handler.
    Custom(Arc<HandlerFn>),
}

impl TagHandler {
    pub fn builtin(action: ParserAction, kind: NodeKind) -> Self {
        TagHandler::Builtin { action, kind }
    }

    pub fn custom<F>(handler: F) -> Self
    where
        F: Fn(&Tag) -> (ParserAction, Node) + Send + Sync + 'static,
    {
        TagHandler::Custom(Arc::new(handler))
    }

    /// Run the handler. The returned node does not carry the tag yet.
    pub fn invoke(&self, tag: &Tag) -> (ParserAction, Node) {
        match self {
            TagHandler::Builtin { action, kind } => (*action, Node::new(kind.clone())),
            TagHandler::Custom(handler) => handler(tag),
        }
    }
}

impl fmt::Debug for TagHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagHandler::Builtin { action, kind } => f
                .debug_struct("Builtin")
                .field("action", action)
                .field("kind", kind)
                .finish(),
            TagHandler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The built-in tag table.
fn builtins() -> [(&'static str, ParserAction, NodeKind); 10] {
    use NodeKind::*;
    use ParserAction::*;
    [
        ("end", End, Null),
        ("left", AddChildAndBranch, Left),
        ("center", AddChildAndBranch, Center),
        ("right", AddChildAndBranch, Right),
        ("justify", AddChildAndBranch, Justify),
        ("paragraph", AddChildAndBranch, Paragraph),
        ("numbers", AddChildAndBranch, Numbers),
        ("bullets", AddChildAndBranch, Bullets),
        ("item", AddChildAndBranch, Item),
        // bare `#`
        ("", AddChild, LineBreak),
    ]
}

/// Mapping from tag names to handlers.
///
/// Bindings are added before parsing; a parse only reads the registry.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    bindings: HashMap<String, TagHandler>,
}

impl TagRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tags.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, action, kind) in builtins() {
            registry.bind(name, TagHandler::builtin(action, kind));
        }
        registry
    }

    /// Bind `name` to `handler`, returning the binding it replaces.
    pub fn bind(&mut self, name: impl Into<String>, handler: TagHandler) -> Option<TagHandler> {
        self.bindings.insert(name.into(), handler)
    }

    /// Bind `name` to a closure.
    pub fn bind_fn<F>(&mut self, name: impl Into<String>, handler: F) -> Option<TagHandler>
    where
        F: Fn(&Tag) -> (ParserAction, Node) + Send + Sync + 'static,
    {
        self.bind(name, TagHandler::custom(handler))
    }

    pub fn get(&self, name: &str) -> Option<&TagHandler> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolve a tag into a block, attaching the tag to the produced node.
    pub fn tag_to_node(&self, tag: Arc<Tag>) -> Result<Block, TagError> {
        let Some(handler) = self.bindings.get(tag.name()) else {
            return Err(TagError::new(TagErrorKind::UnknownTag, tag));
        };
        let (action, mut node) = handler.invoke(&tag);
        trace!(tag = tag.name(), ?action, kind = %node.kind(), "resolved tag");
        node.set_tag(tag);
        Ok(Block { action, node })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceLocation;
    use facet_testhelpers::test;

    fn tag(name: &str) -> Arc<Tag> {
        Arc::new(Tag::new(name, Vec::new(), SourceLocation::start()))
    }

    #[test]
    fn test_builtin_table() {
        let registry = TagRegistry::with_builtins();
        let expected = [
            ("end", ParserAction::End, NodeKind::Null),
            ("left", ParserAction::AddChildAndBranch, NodeKind::Left),
            ("center", ParserAction::AddChildAndBranch, NodeKind::Center),
            ("right", ParserAction::AddChildAndBranch, NodeKind::Right),
            ("justify", ParserAction::AddChildAndBranch, NodeKind::Justify),
            ("paragraph", ParserAction::AddChildAndBranch, NodeKind::Paragraph),
            ("numbers", ParserAction::AddChildAndBranch, NodeKind::Numbers),
            ("bullets", ParserAction::AddChildAndBranch, NodeKind::Bullets),
            ("item", ParserAction::AddChildAndBranch, NodeKind::Item),
            ("", ParserAction::AddChild, NodeKind::LineBreak),
        ];
        assert_eq!(registry.len(), expected.len());
        for (name, action, kind) in expected {
            let block = registry.tag_to_node(tag(name)).unwrap();
            assert_eq!(block.action, action, "action for {:?}", name);
            assert_eq!(block.node.kind(), &kind, "kind for {:?}", name);
        }
    }

    #[test]
    fn test_tag_is_attached() {
        let registry = TagRegistry::with_builtins();
        let center = tag("center");
        let block = registry.tag_to_node(center.clone()).unwrap();
        assert!(Arc::ptr_eq(block.node.tag().unwrap(), &center));
    }

    #[test]
    fn test_unknown_tag() {
        let registry = TagRegistry::with_builtins();
        let err = registry.tag_to_node(tag("nonexistent")).unwrap_err();
        assert_eq!(err.kind, TagErrorKind::UnknownTag);
        assert_eq!(err.tag.name(), "nonexistent");
        assert_eq!(err.message(), "Unknown tag");
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = TagRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.tag_to_node(tag("")).is_err());
    }

    #[test]
    fn test_custom_handler_sees_arguments() {
        let mut registry = TagRegistry::with_builtins();
        registry.bind_fn("box", |tag| {
            let kind = format!("box-{}", tag.arguments().join("-"));
            (ParserAction::AddChildAndBranch, Node::custom(kind))
        });
        let tag = Arc::new(Tag::new(
            "box",
            vec!["a".into(), "b".into()],
            SourceLocation::start(),
        ));
        let block = registry.tag_to_node(tag).unwrap();
        assert_eq!(block.action, ParserAction::AddChildAndBranch);
        assert_eq!(block.node.kind(), &NodeKind::custom("box-a-b"));
        assert_eq!(block.node.tag().unwrap().arguments(), ["a", "b"]);
    }

    #[test]
    fn test_custom_binding_shadows_builtin() {
        let mut registry = TagRegistry::with_builtins();
        let previous =
            registry.bind_fn("end", |_| (ParserAction::Ignore, Node::new(NodeKind::Null)));
        assert!(matches!(
            previous,
            Some(TagHandler::Builtin {
                action: ParserAction::End,
                ..
            })
        ));
        let block = registry.tag_to_node(tag("end")).unwrap();
        assert_eq!(block.action, ParserAction::Ignore);
    }

    #[test]
    fn test_names_sorted() {
        let registry = TagRegistry::with_builtins();
        let names = registry.names();
        assert_eq!(names.first(), Some(&""));
        assert!(names.contains(&"paragraph"));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
