pub mod card_view;
pub mod edit_prompt;
pub mod help_overlay;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::cursor::AnswerVisibility;
use crate::editor::mode::EditorMode;
use crate::editor::pane::PaneFocus;
use crate::editor::state::EditorState;
use crate::theme::Theme;
use card_view::PaneView;

/// Main UI structure that manages the terminal interface rendering.
///
/// The screen is split into:
/// - Question pane (top)
/// - Answer pane (middle)
/// - Status line: mode, database, loaded card, answer toggle label
/// - Message area (bottom): status messages or the `:` prompt
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use cardquill::ui::UI;
    /// use cardquill::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("default-dark").unwrap();
    /// let ui = UI::new(theme);
    /// assert_eq!(ui.theme_name(), "default-dark");
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &EditorState,
    ) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(50), // Question pane
                    Constraint::Min(3),         // Answer pane
                    Constraint::Length(1),      // Status line
                    Constraint::Length(1),      // Message area
                ])
                .split(f.area());

            let inserting = *state.mode() == EditorMode::Insert;
            let hidden_answer = state.review_mode()
                && state.current_card().is_some()
                && state.answer_visibility() == AnswerVisibility::Hidden;

            let question = PaneView {
                pane: state.question(),
                title: "Question",
                title_color: colors.question_title,
                focused: state.focus() == PaneFocus::Question,
                show_cursor: inserting && state.focus() == PaneFocus::Question,
                placeholder: None,
            };
            let answer = PaneView {
                pane: state.answer(),
                title: "Answer",
                title_color: colors.answer_title,
                focused: state.focus() == PaneFocus::Answer,
                show_cursor: inserting && state.focus() == PaneFocus::Answer,
                placeholder: hidden_answer.then_some("(hidden - press a to show)"),
            };
            card_view::render_pane(f, chunks[0], &question, colors);
            card_view::render_pane(f, chunks[1], &answer, colors);

            status_line::render_status_line(f, chunks[2], state, colors);

            if *state.mode() == EditorMode::Command {
                edit_prompt::render_edit_prompt(f, chunks[3], state.command_buffer(), colors, ":");
            } else {
                message_area::render_message_area(f, chunks[3], state, colors);
            }

            // Help overlay (rendered on top if visible)
            if state.show_help() {
                help_overlay::render_help_overlay(f, colors);
            }
        })?;

        Ok(())
    }
}
