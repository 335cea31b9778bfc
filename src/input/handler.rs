//! Input event handler for reading and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::editor::commands::{dispatch, Command};
use crate::editor::cursor::Motion;
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// Wraps the events iterator to keep its state across calls, so rapid input
/// (a terminal paste) does not lose characters.
enum EventSource {
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin is not a terminal)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// Keys are first mapped to [`InputEvent`]s for the current mode; events
/// that stand for a user action are then turned into a [`Command`] and
/// dispatched.
pub struct InputHandler {
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Blocks until the next terminal event arrives.
    ///
    /// Returns `None` once the input stream is exhausted.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        let next = match &mut self.events {
            EventSource::Stdin(events) => events.next(),
            EventSource::Tty(events) => events.next(),
        };
        match next {
            Some(event_result) => Ok(Some(event_result?)),
            None => Ok(None),
        }
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns `Ok(true)` if the application should quit.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cardquill::input::InputHandler;
    /// use cardquill::editor::state::EditorState;
    /// use cardquill::store::CardStore;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());
    /// let should_quit = handler.handle_event(Event::Key(Key::Char('q')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        // Any key closes the help overlay
        if state.show_help() {
            if let Event::Key(_) = event {
                state.toggle_help();
            }
            return Ok(false);
        }

        if *state.mode() == EditorMode::Command {
            if let Event::Key(key) = event {
                return self.handle_command_key(key, state);
            }
            return Ok(false);
        }

        let input = map_key_event(event, state.mode());
        let command = match input {
            InputEvent::Quit => Command::Quit,
            InputEvent::Save => Command::SaveCard,
            InputEvent::NewQuestion => Command::NewQuestion,
            InputEvent::ToggleAnswer => Command::ToggleAnswer,
            InputEvent::ToggleReviewMode => Command::ToggleReviewMode,
            InputEvent::FirstCard => Command::Navigate(Motion::First),
            InputEvent::PrevCard => Command::Navigate(Motion::Prev),
            InputEvent::NextCard => Command::Navigate(Motion::Next),
            InputEvent::LastCard => Command::Navigate(Motion::Last),
            InputEvent::Paste => Command::PasteClipboard,
            InputEvent::Help => Command::Help,
            other => {
                self.handle_editing(other, state);
                return Ok(false);
            }
        };
        dispatch(state, command)
    }

    /// Mode switches and text editing that do not touch the store.
    fn handle_editing(&self, input: InputEvent, state: &mut EditorState) {
        match input {
            InputEvent::EnterInsertMode => {
                state.set_mode(EditorMode::Insert);
                state.clear_message();
            }
            InputEvent::EnterCommandMode => {
                state.clear_command_buffer();
                state.set_mode(EditorMode::Command);
            }
            InputEvent::ExitMode => state.set_mode(EditorMode::Normal),
            InputEvent::SwitchPane => state.toggle_focus(),
            InputEvent::InsertCharacter(c) => state.focused_pane_mut().insert_char(c),
            InputEvent::InsertEnter => state.focused_pane_mut().newline(),
            InputEvent::InsertBackspace => state.focused_pane_mut().backspace(),
            InputEvent::InsertDelete => state.focused_pane_mut().delete(),
            InputEvent::CursorLeft => state.focused_pane_mut().move_left(),
            InputEvent::CursorRight => state.focused_pane_mut().move_right(),
            InputEvent::CursorUp => state.focused_pane_mut().move_up(),
            InputEvent::CursorDown => state.focused_pane_mut().move_down(),
            InputEvent::LineStart => state.focused_pane_mut().move_line_start(),
            InputEvent::LineEnd => state.focused_pane_mut().move_line_end(),
            _ => {}
        }
    }

    fn handle_command_key(&self, key: Key, state: &mut EditorState) -> Result<bool> {
        match key {
            Key::Char('\n') => {
                // Execute command and return to normal mode
                let line = state.command_buffer().to_string();
                state.clear_command_buffer();
                state.set_mode(EditorMode::Normal);
                match Command::parse(&line) {
                    Ok(Some(command)) => dispatch(state, command),
                    Ok(None) => Ok(false),
                    Err(message) => {
                        state.set_message(message, MessageLevel::Error);
                        Ok(false)
                    }
                }
            }
            Key::Char(c) => {
                state.push_to_command_buffer(c);
                Ok(false)
            }
            Key::Backspace => {
                state.pop_from_command_buffer();
                // Exit command mode if buffer is now empty
                if state.command_buffer().is_empty() {
                    state.set_mode(EditorMode::Normal);
                }
                Ok(false)
            }
            Key::Esc => {
                state.clear_command_buffer();
                state.set_mode(EditorMode::Normal);
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
