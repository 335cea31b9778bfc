//! CardQuill - a terminal question/answer card editor and reviewer.
//!
//! Cards are stored in a single SQLite table and paged through with a
//! navigation cursor, either with answers fully exposed or in review mode
//! where each answer stays hidden until requested.

pub mod config;
pub mod editor;
pub mod error;
pub mod file;
pub mod input;
pub mod store;
pub mod theme;
pub mod ui;
