//! Tree builder driven by collected blocks.

use louvre_parse::{Block, ParserAction};
use tracing::{debug, trace, warn};

use crate::{NodeError, NodeErrorKind, NodeId, NodeRef, ParseOptions, Tree, UnclosedBranches};

/// Builds a [`Tree`] from a sequence of blocks.
///
/// The builder keeps a single "current branch". Parent links in the tree
/// double as the branch stack: `AddChildAndBranch` descends into the new
/// node and `End` climbs back to the branch's parent.
pub struct TreeBuilder {
    tree: Tree,
    branch: NodeId,
}

impl TreeBuilder {
    /// Create a builder whose current branch is a fresh root.
    pub fn new() -> Self {
        let tree = Tree::new();
        let branch = tree.root().id();
        Self { tree, branch }
    }

    /// The node currently accepting children.
    pub fn branch(&self) -> NodeRef<'_> {
        self.tree.node_ref(self.branch)
    }

    /// Number of branches opened and not yet closed.
    pub fn open_branches(&self) -> usize {
        self.branch().depth()
    }

    /// Apply one block.
    pub fn apply(&mut self, block: Block) -> Result<(), NodeError> {
        let Block { action, node } = block;
        match action {
            ParserAction::AddChild => {
                let id = self.tree.append_child(self.branch, node);
                trace!(id = id.index(), parent = self.branch.index(), "add child");
            }
            ParserAction::AddChildAndBranch => {
                let id = self.tree.append_child(self.branch, node);
                debug!(id = id.index(), parent = self.branch.index(), "open branch");
                self.branch = id;
            }
            ParserAction::End => match self.tree.parent_of(self.branch) {
                Some(parent) => {
                    debug!(id = self.branch.index(), parent = parent.index(), "close branch");
                    self.branch = parent;
                }
                None => return Err(NodeError::new(NodeErrorKind::UnexpectedEnd, node)),
            },
            ParserAction::Ignore => {
                trace!(kind = %node.kind(), "ignored block");
            }
        }
        Ok(())
    }

    /// Finish building.
    ///
    /// With open branches left, the tree's head is the innermost one, or the
    /// build fails when `options` ask for [`UnclosedBranches::Error`].
    pub fn finish(mut self, options: &ParseOptions) -> Result<Tree, NodeError> {
        let open = self.open_branches();
        if open > 0 {
            match options.unclosed_branches {
                UnclosedBranches::Return => {
                    warn!(open, "input ended with open branches");
                }
                UnclosedBranches::Error => {
                    let node = self.branch().node().clone();
                    return Err(NodeError::new(NodeErrorKind::UnclosedBranch, node));
                }
            }
        }
        self.tree.set_head(self.branch);
        Ok(self.tree)
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
