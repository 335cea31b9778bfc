//! Editor state management.
//!
//! [`EditorState`] owns everything the running application knows: the open
//! card store, the navigation cursor, both text panes, the current mode,
//! the command line buffer and the status message.
//!
//! # Example
//!
//! ```
//! use cardquill::editor::state::EditorState;
//! use cardquill::editor::mode::EditorMode;
//! use cardquill::store::CardStore;
//!
//! let store = CardStore::open_in_memory().unwrap();
//! let mut state = EditorState::new_with_default_theme(store);
//!
//! assert_eq!(state.mode(), &EditorMode::Normal);
//! state.set_mode(EditorMode::Insert);
//! assert_eq!(state.mode(), &EditorMode::Insert);
//! ```

use std::path::{Path, PathBuf};

use log::info;

use super::cursor::{AnswerVisibility, Motion, NavigationCursor, ViewMode};
use super::mode::EditorMode;
use super::pane::{EditorSurface, PaneFocus, TextPane};
use crate::error::Result;
use crate::store::{CardId, CardStore};

/// File name written when an image is pasted from the clipboard.
pub const DEFAULT_PASTED_IMAGE_NAME: &str = "pasted_image.png";

/// A message shown in the message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Manages the complete runtime state of the application.
pub struct EditorState {
    store: CardStore,
    cursor: NavigationCursor,
    question: TextPane,
    answer: TextPane,
    focus: PaneFocus,
    mode: EditorMode,
    command_buffer: String,
    message: Option<Message>,
    show_help: bool,
    current_theme: String,
    pending_theme: Option<String>,
    image_dir: PathBuf,
    pasted_image_name: String,
}

impl EditorState {
    /// Creates a state around an already opened store.
    pub fn new(store: CardStore, theme_name: String) -> Self {
        Self {
            store,
            cursor: NavigationCursor::new(),
            question: TextPane::new(),
            answer: TextPane::new(),
            focus: PaneFocus::default(),
            mode: EditorMode::default(),
            command_buffer: String::new(),
            message: None,
            show_help: false,
            current_theme: theme_name,
            pending_theme: None,
            image_dir: PathBuf::from("."),
            pasted_image_name: DEFAULT_PASTED_IMAGE_NAME.to_string(),
        }
    }

    pub fn new_with_default_theme(store: CardStore) -> Self {
        Self::new(store, "default-dark".to_string())
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Swaps in a different database. The previous connection is closed and
    /// the cursor forgets the loaded card, whose id belongs to the old file.
    /// Both panes are cleared so the hidden answer state matches the screen.
    pub fn replace_store(&mut self, store: CardStore) {
        info!(
            "switching card store to {}",
            store
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".to_string())
        );
        self.store = store;
        self.question.clear();
        self.answer.clear();
        self.cursor.reset();
    }

    /// Title shown in the status line: the database path.
    pub fn title(&self) -> String {
        match self.store.path() {
            Some(path) => path.display().to_string(),
            None => "[memory]".to_string(),
        }
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn current_card(&self) -> Option<CardId> {
        self.cursor.current_id()
    }

    pub fn answer_visibility(&self) -> AnswerVisibility {
        self.cursor.visibility()
    }

    pub fn review_mode(&self) -> bool {
        self.cursor.is_review()
    }

    pub fn set_review_mode(&mut self, on: bool) {
        let mode = if on { ViewMode::Review } else { ViewMode::Full };
        self.cursor.set_view_mode(mode);
    }

    /// Label of the answer toggle, mirroring what pressing it would do.
    pub fn toggle_answer_label(&self) -> &'static str {
        match self.cursor.visibility() {
            AnswerVisibility::Shown => "Hide Answer",
            AnswerVisibility::Hidden => "Show Answer",
        }
    }

    /// Moves the cursor and loads the target card into the panes.
    pub fn navigate(&mut self, motion: Motion) -> Result<Option<CardId>> {
        self.cursor
            .navigate(&self.store, motion, &mut self.question, &mut self.answer)
    }

    /// Shows or hides the answer of the loaded card.
    pub fn toggle_answer(&mut self) -> Result<AnswerVisibility> {
        self.cursor.toggle_answer(&self.store, &mut self.answer)
    }

    /// Stores the contents of both panes as a new card.
    pub fn save_card(&mut self) -> Result<CardId> {
        self.store
            .insert(&self.question.get_rich_text(), &self.answer.get_rich_text())
    }

    /// Empties both panes for a new question.
    pub fn new_question(&mut self) {
        self.question.clear();
        self.answer.clear();
    }

    pub fn question(&self) -> &TextPane {
        &self.question
    }

    pub fn answer(&self) -> &TextPane {
        &self.answer
    }

    pub fn question_mut(&mut self) -> &mut TextPane {
        &mut self.question
    }

    pub fn answer_mut(&mut self) -> &mut TextPane {
        &mut self.answer
    }

    pub fn focus(&self) -> PaneFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: PaneFocus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// The pane keyboard input goes to.
    pub fn focused_pane_mut(&mut self) -> &mut TextPane {
        match self.focus {
            PaneFocus::Question => &mut self.question,
            PaneFocus::Answer => &mut self.answer,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    pub fn set_command_buffer(&mut self, buffer: String) {
        self.command_buffer = buffer;
    }

    pub fn push_to_command_buffer(&mut self, c: char) {
        self.command_buffer.push(c);
    }

    pub fn pop_from_command_buffer(&mut self) {
        self.command_buffer.pop();
    }

    pub fn clear_command_buffer(&mut self) {
        self.command_buffer.clear();
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// Takes the pending theme change request, if any.
    pub fn take_pending_theme(&mut self) -> Option<String> {
        self.pending_theme.take()
    }

    pub fn request_theme_change(&mut self, theme_name: String) {
        self.current_theme = theme_name.clone();
        self.pending_theme = Some(theme_name);
    }

    /// Directory pasted images are written to.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn set_image_dir(&mut self, dir: PathBuf) {
        self.image_dir = dir;
    }

    pub fn pasted_image_name(&self) -> &str {
        &self.pasted_image_name
    }

    pub fn set_pasted_image_name(&mut self, name: String) {
        self.pasted_image_name = name;
    }
}
