//! Parsed tag invocations.

use std::fmt;

use crate::SourceLocation;

/// A parsed `#name(arg, ...)` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    arguments: Vec<String>,
    location: SourceLocation,
}

impl Tag {
    /// Create a tag. `location` is the position right after the `#`.
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
            location,
        }
    }

    /// Tag name (without `#`). Empty for a bare `#`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in source order.
    #[inline]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Get an argument by index.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Where the tag name starts.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments.join(", "))?;
        }
        Ok(())
    }
}
