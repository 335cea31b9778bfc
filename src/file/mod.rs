//! File output besides the card database.
//!
//! Images pasted from the clipboard are encoded as PNG and written next to
//! the working directory so card markup can reference them.

pub mod paste;
pub mod png;
