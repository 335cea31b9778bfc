//! Editor mode management for modal editing.
//!
//! Following vim-style modal editing, keystrokes mean different things
//! depending on the mode:
//!
//! - **Normal**: navigate cards, save, toggle the answer, switch panes
//! - **Insert**: type into the focused pane
//! - **Command**: type a `:` command (open a database, quit, ...)
//!
//! # Example
//!
//! ```
//! use cardquill::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Card navigation and single-key actions.
    #[default]
    Normal,
    /// Text entry into the focused pane.
    Insert,
    /// `:` command line entry.
    Command,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Command => write!(f, "COMMAND"),
        }
    }
}
