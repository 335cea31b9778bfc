//! User actions and their handlers.
//!
//! Every key binding and `:` command resolves to one [`Command`], and
//! [`dispatch`] runs exactly one handler per command. Handlers report their
//! outcome on the status line; store failures become error messages instead
//! of tearing down the terminal.
//!
//! # Example
//!
//! ```
//! use cardquill::editor::commands::{dispatch, Command};
//! use cardquill::editor::cursor::Motion;
//! use cardquill::editor::state::EditorState;
//! use cardquill::store::CardStore;
//!
//! let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());
//! state.question_mut().insert_str("2 + 2?");
//! state.answer_mut().insert_str("4");
//! dispatch(&mut state, Command::SaveCard).unwrap();
//!
//! dispatch(&mut state, Command::NewQuestion).unwrap();
//! dispatch(&mut state, Command::Navigate(Motion::First)).unwrap();
//! assert_eq!(state.question().text(), "2 + 2?");
//! assert_eq!(state.message().unwrap().text, "Loaded question 1.");
//! ```

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, error, warn};

use super::cursor::{AnswerVisibility, Motion};
use super::state::{EditorState, MessageLevel};
use crate::error::StoreError;
use crate::file::paste::{image_tag, save_pasted_image};
use crate::store::CardStore;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create (or open) a database file and make it current.
    NewDatabase(PathBuf),
    /// Switch to an existing database file.
    LoadDatabase(PathBuf),
    /// Switch to an existing database file and report its size.
    OpenDatabase(PathBuf),
    /// Insert the panes' contents as a new card.
    SaveCard,
    /// Clear both panes.
    NewQuestion,
    /// Show or hide the loaded card's answer.
    ToggleAnswer,
    ToggleReviewMode,
    SetReviewMode(bool),
    Navigate(Motion),
    /// Paste whatever the system clipboard holds into the focused pane.
    PasteClipboard,
    /// Save an RGBA image and embed a reference to it in the focused pane.
    PasteImage {
        width: usize,
        height: usize,
        rgba: Vec<u8>,
    },
    PasteText(String),
    SetTheme(String),
    Help,
    Quit,
}

impl Command {
    /// Parses a `:` command line (without the colon).
    ///
    /// Returns `Ok(None)` for an empty line and `Err` with a user-facing
    /// message for anything unrecognised.
    ///
    /// # Example
    ///
    /// ```
    /// use cardquill::editor::commands::Command;
    /// use cardquill::editor::cursor::Motion;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Command::parse("next"), Ok(Some(Command::Navigate(Motion::Next))));
    /// assert_eq!(
    ///     Command::parse("open cards.db"),
    ///     Ok(Some(Command::OpenDatabase(PathBuf::from("cards.db"))))
    /// );
    /// assert!(Command::parse("open").is_err());
    /// ```
    pub fn parse(line: &str) -> std::result::Result<Option<Command>, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let path_arg = || {
            if arg.is_empty() {
                Err("No file name specified".to_string())
            } else {
                Ok(PathBuf::from(arg))
            }
        };

        let command = match name {
            "" => return Ok(None),
            "new" | "create" => Command::NewDatabase(path_arg()?),
            "load" | "e" => Command::LoadDatabase(path_arg()?),
            "open" => Command::OpenDatabase(path_arg()?),
            "w" | "save" => Command::SaveCard,
            "clear" => Command::NewQuestion,
            "answer" => Command::ToggleAnswer,
            "review" => match arg {
                "" => Command::ToggleReviewMode,
                "on" => Command::SetReviewMode(true),
                "off" => Command::SetReviewMode(false),
                other => return Err(format!("Unknown review setting: {} (use on/off)", other)),
            },
            "first" => Command::Navigate(Motion::First),
            "prev" => Command::Navigate(Motion::Prev),
            "next" => Command::Navigate(Motion::Next),
            "last" => Command::Navigate(Motion::Last),
            "paste" => Command::PasteClipboard,
            "theme" if !arg.is_empty() => Command::SetTheme(arg.to_string()),
            "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => return Err(format!("Unknown command: {}", line)),
        };
        Ok(Some(command))
    }
}

/// Runs the handler for `command`.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch(state: &mut EditorState, command: Command) -> Result<bool> {
    debug!("dispatch {:?}", command);
    match command {
        Command::NewDatabase(path) => {
            switch_database(state, CardStore::create_or_open(&path), "New database created.");
        }
        Command::LoadDatabase(path) => {
            switch_database(state, CardStore::open_existing(&path), "Database loaded.");
        }
        Command::OpenDatabase(path) => {
            if switch_database(state, CardStore::open_existing(&path), "Database opened.") {
                match state.store().count() {
                    Ok(n) => state.set_message(
                        format!("Database contains {} records. Database opened.", n),
                        MessageLevel::Info,
                    ),
                    Err(e) => report(state, "Could not read records", e),
                }
            }
        }
        Command::SaveCard => {
            state.set_message("Saving test...".to_string(), MessageLevel::Info);
            match state.save_card() {
                Ok(_) => {
                    state.set_message("Test saved successfully.".to_string(), MessageLevel::Info)
                }
                Err(e) => report(state, "Error saving test", e),
            }
        }
        Command::NewQuestion => {
            state.new_question();
            state.set_message("Ready for new question.".to_string(), MessageLevel::Info);
        }
        Command::ToggleAnswer => {
            let had_card = state.current_card().is_some();
            match state.toggle_answer() {
                Ok(AnswerVisibility::Hidden) => {
                    state.set_message("Answer hidden.".to_string(), MessageLevel::Info)
                }
                Ok(AnswerVisibility::Shown) if had_card => {
                    state.set_message("Answer displayed.".to_string(), MessageLevel::Info)
                }
                Ok(AnswerVisibility::Shown) => {}
                Err(e) => report(state, "Error reading answer", e),
            }
        }
        Command::ToggleReviewMode => {
            let on = !state.review_mode();
            set_review_mode(state, on);
        }
        Command::SetReviewMode(on) => set_review_mode(state, on),
        Command::Navigate(motion) => match state.navigate(motion) {
            Ok(Some(id)) => {
                state.set_message(format!("Loaded question {}.", id), MessageLevel::Info)
            }
            Ok(None) => {}
            Err(e) => report(state, "Error loading question", e),
        },
        Command::PasteClipboard => return paste_clipboard(state),
        Command::PasteImage {
            width,
            height,
            rgba,
        } => {
            let name = state.pasted_image_name().to_string();
            match save_pasted_image(state.image_dir(), &name, width, height, &rgba) {
                Ok(_) => {
                    state.focused_pane_mut().insert_str(&image_tag(&name));
                    state.set_message(format!("Pasted image as {}", name), MessageLevel::Info);
                }
                Err(e) => {
                    warn!("pasting image failed: {:#}", e);
                    state.set_message(
                        format!("Error saving pasted image: {:#}", e),
                        MessageLevel::Error,
                    );
                }
            }
        }
        Command::PasteText(text) => state.focused_pane_mut().insert_str(&text),
        Command::SetTheme(name) => {
            use crate::theme::{get_builtin_theme, list_builtin_themes};
            if get_builtin_theme(&name).is_some() {
                state.set_message(format!("Switched to theme: {}", name), MessageLevel::Info);
                state.request_theme_change(name);
            } else {
                state.set_message(
                    format!(
                        "Unknown theme: {} (available: {})",
                        name,
                        list_builtin_themes().join(", ")
                    ),
                    MessageLevel::Error,
                );
            }
        }
        Command::Help => state.toggle_help(),
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

/// Makes `opened` the current store. On failure the previous store stays
/// current. Returns whether the switch happened.
fn switch_database(
    state: &mut EditorState,
    opened: crate::error::Result<CardStore>,
    success: &str,
) -> bool {
    match opened {
        Ok(store) => {
            state.replace_store(store);
            state.set_message(success.to_string(), MessageLevel::Info);
            true
        }
        Err(e) => {
            report(state, "Could not open database", e);
            false
        }
    }
}

fn set_review_mode(state: &mut EditorState, on: bool) {
    state.set_review_mode(on);
    let text = if on { "Review mode on" } else { "Review mode off" };
    state.set_message(text.to_string(), MessageLevel::Info);
}

fn paste_clipboard(state: &mut EditorState) -> Result<bool> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            warn!("clipboard unavailable: {}", e);
            state.set_message(format!("Clipboard unavailable: {}", e), MessageLevel::Error);
            return Ok(false);
        }
    };

    // Images take precedence, the same way a rich-text widget prefers them.
    if let Ok(image) = clipboard.get_image() {
        return dispatch(
            state,
            Command::PasteImage {
                width: image.width,
                height: image.height,
                rgba: image.bytes.into_owned(),
            },
        );
    }
    match clipboard.get_text() {
        Ok(text) => dispatch(state, Command::PasteText(text)),
        Err(_) => {
            state.set_message("Clipboard is empty".to_string(), MessageLevel::Warning);
            Ok(false)
        }
    }
}

fn report(state: &mut EditorState, context: &str, e: StoreError) {
    error!("{}: {}", context, e);
    state.set_message(format!("{}: {}", context, e), MessageLevel::Error);
}
