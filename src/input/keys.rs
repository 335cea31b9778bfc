//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions rather than specific key presses,
/// allowing for mode-specific keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit
    Quit,
    /// Enter insert mode in the focused pane
    EnterInsertMode,
    /// Enter command mode
    EnterCommandMode,
    /// Exit current mode back to normal mode
    ExitMode,
    /// Move keyboard focus to the other pane
    SwitchPane,
    /// Save both panes as a new card
    Save,
    /// Clear both panes
    NewQuestion,
    /// Show or hide the answer
    ToggleAnswer,
    /// Turn review mode on or off
    ToggleReviewMode,
    /// Load the first card
    FirstCard,
    /// Load the previous card
    PrevCard,
    /// Load the next card
    NextCard,
    /// Load the last card
    LastCard,
    /// Paste from the system clipboard
    Paste,
    /// Toggle help overlay
    Help,
    /// Insert a character in insert mode
    InsertCharacter(char),
    /// Backspace in insert mode
    InsertBackspace,
    /// Delete in insert mode
    InsertDelete,
    /// Enter in insert mode
    InsertEnter,
    /// Text cursor movement in insert mode
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    LineStart,
    LineEnd,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use cardquill::editor::mode::EditorMode;
/// use cardquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('l'));
/// assert_eq!(map_key_event(event, &EditorMode::Normal), InputEvent::NextCard);
/// ```
pub fn map_key_event(event: Event, mode: &EditorMode) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Ctrl('s') => InputEvent::Save,
            Key::Ctrl('v') => InputEvent::Paste,
            Key::Char('q') => InputEvent::Quit,
            Key::Char('i') | Key::Char('e') => InputEvent::EnterInsertMode,
            Key::Char(':') => InputEvent::EnterCommandMode,
            Key::Char('\t') => InputEvent::SwitchPane,
            Key::Char('s') => InputEvent::Save,
            Key::Char('n') => InputEvent::NewQuestion,
            Key::Char('a') | Key::Char(' ') => InputEvent::ToggleAnswer,
            Key::Char('r') => InputEvent::ToggleReviewMode,
            Key::Char('g') | Key::Home => InputEvent::FirstCard,
            Key::Char('h') | Key::Char('k') | Key::Left | Key::PageUp => InputEvent::PrevCard,
            Key::Char('l') | Key::Char('j') | Key::Right | Key::PageDown => InputEvent::NextCard,
            Key::Char('G') | Key::End => InputEvent::LastCard,
            Key::Char('p') => InputEvent::Paste,
            Key::Char('?') | Key::F(1) => InputEvent::Help,
            _ => InputEvent::Unknown,
        },
        EditorMode::Insert => match key {
            Key::Esc => InputEvent::ExitMode,
            Key::Ctrl('v') => InputEvent::Paste,
            Key::Char('\t') => InputEvent::SwitchPane,
            Key::Char('\n') => InputEvent::InsertEnter,
            Key::Backspace => InputEvent::InsertBackspace,
            Key::Delete => InputEvent::InsertDelete,
            Key::Left => InputEvent::CursorLeft,
            Key::Right => InputEvent::CursorRight,
            Key::Up => InputEvent::CursorUp,
            Key::Down => InputEvent::CursorDown,
            Key::Home => InputEvent::LineStart,
            Key::End => InputEvent::LineEnd,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
        EditorMode::Command => match key {
            Key::Esc => InputEvent::ExitMode,
            _ => InputEvent::Unknown,
        },
    }
}
