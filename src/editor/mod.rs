//! Editor state, panes, navigation and command handling.
//!
//! # Modules
//!
//! - `mode`: Editor mode enumeration
//! - `pane`: The two text panes and the `EditorSurface` trait
//! - `cursor`: Navigation cursor over stored cards
//! - `state`: Editor state (store, cursor, panes, mode, messages)
//! - `commands`: One handler per user action

pub mod commands;
pub mod cursor;
pub mod mode;
pub mod pane;
pub mod state;
