//! Rendering of the question and answer panes.

use crate::editor::pane::TextPane;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How one pane should be drawn.
pub struct PaneView<'a> {
    pub pane: &'a TextPane,
    pub title: &'a str,
    pub title_color: Color,
    /// Pane receives keyboard input.
    pub focused: bool,
    /// Place the terminal cursor at the pane's text cursor.
    pub show_cursor: bool,
    /// Shown dimmed when the pane is empty.
    pub placeholder: Option<&'a str>,
}

/// First visible row so that the cursor row stays on screen.
pub fn scroll_offset(cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor_row.saturating_sub(height - 1)
}

/// Renders a bordered pane with its text, scrolled to keep the cursor visible.
pub fn render_pane(f: &mut Frame, area: Rect, view: &PaneView, colors: &ThemeColors) {
    let border_color = if view.focused {
        colors.focused_border
    } else {
        colors.pane_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", view.title),
            Style::default()
                .fg(view.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(colors.background));

    let inner = block.inner(area);
    let (row, col) = view.pane.cursor_row_col();
    let offset = scroll_offset(row, inner.height as usize);

    let lines: Vec<Line> = match view.placeholder {
        Some(placeholder) if view.pane.is_empty() => vec![Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(colors.hidden_placeholder)
                .add_modifier(Modifier::ITALIC),
        ))],
        _ => view
            .pane
            .text()
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect(),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(colors.foreground).bg(colors.background))
        .scroll((offset as u16, 0));
    f.render_widget(paragraph, area);

    if view.show_cursor && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (col as u16).min(inner.width - 1);
        let y = inner.y + (row - offset) as u16;
        f.set_cursor_position(Position::new(x, y));
    }
}
