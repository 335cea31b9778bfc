//! Single-line prompt used for `:` commands.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders `prompt` followed by `buffer` and a block cursor at the end.
pub fn render_edit_prompt(
    f: &mut Frame,
    area: Rect,
    buffer: &str,
    colors: &ThemeColors,
    prompt: &str,
) {
    let text_style = Style::default()
        .fg(colors.foreground)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(prompt, text_style),
        Span::styled(buffer, text_style),
        // Inverted space as a block cursor
        Span::styled(
            " ",
            Style::default().fg(colors.background).bg(colors.cursor),
        ),
    ]);
    let prompt = Paragraph::new(line).style(Style::default().bg(colors.background));

    f.render_widget(prompt, area);
}
