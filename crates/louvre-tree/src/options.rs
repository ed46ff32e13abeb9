//! Parse options.

/// What to do when input ends while branches are still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnclosedBranches {
    /// Return the tree with the innermost open branch as its head.
    #[default]
    Return,
    /// Fail with a node error naming the innermost open branch.
    Error,
}

/// Options for [`Parser`](crate::Parser).
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Handling of branches left open at end of input (default: `Return`)
    pub unclosed_branches: UnclosedBranches,
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents that leave branches open.
    pub fn strict(mut self) -> Self {
        self.unclosed_branches = UnclosedBranches::Error;
        self
    }

    /// Set unclosed branch handling.
    pub fn unclosed_branches(mut self, mode: UnclosedBranches) -> Self {
        self.unclosed_branches = mode;
        self
    }
}
