//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, INSERT, COMMAND)
//! - Database path
//! - Review mode indicator
//! - Loaded card and the answer toggle label
//!
//! Example status line: `NORMAL | cards.db [review]          card 3 | Show Answer`

use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Text for the left and right halves of the status line.
pub fn status_text(state: &EditorState) -> (String, String) {
    let review = if state.review_mode() { " [review]" } else { "" };
    let left = format!("{} | {}{}", state.mode(), state.title(), review);

    let card = match state.current_card() {
        Some(id) => format!("card {}", id),
        None => "no card".to_string(),
    };
    let right = format!("{} | {}", card, state.toggle_answer_label());
    (left, right)
}

/// Renders the status line.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let (left, right) = status_text(state);

    let total_width = area.width as usize;
    let used = left.chars().count() + right.chars().count();
    let padding = if used + 1 < total_width {
        total_width - used
    } else {
        1
    };

    let style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);

    let line = Line::from(vec![
        Span::styled(left, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(padding), style),
        Span::styled(right, style),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::commands::{dispatch, Command};
    use crate::store::CardStore;

    #[test]
    fn test_status_text_reflects_review_and_card() {
        let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());
        let (left, right) = status_text(&state);
        assert_eq!(left, "NORMAL | [memory]");
        assert_eq!(right, "no card | Show Answer");

        state.store().insert("q", "a").unwrap();
        dispatch(&mut state, Command::SetReviewMode(true)).unwrap();
        dispatch(&mut state, Command::Navigate(crate::editor::cursor::Motion::First)).unwrap();

        let (left, right) = status_text(&state);
        assert_eq!(left, "NORMAL | [memory] [review]");
        assert_eq!(right, "card 1 | Show Answer");
    }
}
