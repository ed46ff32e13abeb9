//! Source scanning primitives for the Louvre markup language.
//!
//! A [`Cursor`] walks an in-memory source string one character at a time
//! and hands out [`SourceLocation`] snapshots for diagnostics.

mod location;
pub use location::SourceLocation;

mod cursor;
pub use cursor::{Cursor, is_tag_char};
