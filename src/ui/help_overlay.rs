//! Help overlay for displaying keybindings and commands.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Cards",
        &[
            ("g / Home", "First card"),
            ("h / Left", "Previous card"),
            ("l / Right", "Next card"),
            ("G / End", "Last card"),
            ("a / Space", "Show or hide the answer"),
            ("r", "Toggle review mode"),
        ],
    ),
    (
        "Editing",
        &[
            ("i / e", "Type into the focused pane (Esc to stop)"),
            ("Tab", "Switch between question and answer"),
            ("s / Ctrl-s", "Save the panes as a new card"),
            ("n", "Clear both panes for a new question"),
            ("p / Ctrl-v", "Paste clipboard image or text"),
        ],
    ),
    (
        "Commands",
        &[
            (":new <file>", "Create a database and switch to it"),
            (":load <file>", "Switch to an existing database"),
            (":open <file>", "Switch and report the number of cards"),
            (":review on|off", "Set review mode"),
            (":theme <name>", "Change color theme"),
            (":q", "Quit"),
        ],
    ),
];

/// Renders a centered help overlay showing keybindings and commands.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors) {
    let area = centered_rect(70, 80, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" CardQuill Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background));

    let mut help_text = Vec::new();
    for (heading, bindings) in SECTIONS {
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(colors.question_title)
                .add_modifier(Modifier::BOLD),
        )));
        for (keys, description) in bindings.iter() {
            help_text.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", keys),
                    Style::default().fg(colors.answer_title),
                ),
                Span::raw(*description),
            ]));
        }
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default()
            .fg(colors.info)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(colors.foreground))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
