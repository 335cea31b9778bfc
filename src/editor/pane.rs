//! Text panes for the question and answer sides of a card.
//!
//! The core never reaches into a pane's buffer directly; it goes through the
//! [`EditorSurface`] trait, reading on save and writing on load.
//!
//! # Example
//!
//! ```
//! use cardquill::editor::pane::{EditorSurface, TextPane};
//!
//! let mut pane = TextPane::new();
//! pane.insert_str("line one\nline two");
//! assert_eq!(pane.cursor_row_col(), (1, 8));
//!
//! pane.set_rich_text("fresh");
//! assert_eq!(pane.get_rich_text(), "fresh");
//!
//! pane.clear();
//! assert!(pane.is_empty());
//! ```

/// The operations the card logic needs from an editing widget.
pub trait EditorSurface {
    /// Returns the full markup content.
    fn get_rich_text(&self) -> String;
    /// Replaces the content; the cursor moves to the end.
    fn set_rich_text(&mut self, text: &str);
    /// Empties the content.
    fn clear(&mut self);
}

/// Which pane keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Question,
    Answer,
}

impl PaneFocus {
    /// The other pane.
    pub fn toggled(self) -> Self {
        match self {
            PaneFocus::Question => PaneFocus::Answer,
            PaneFocus::Answer => PaneFocus::Question,
        }
    }
}

/// A multi-line text buffer with a character cursor.
///
/// The cursor is a char index into the buffer (not a byte offset), so
/// multi-byte input is handled without splitting code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPane {
    text: String,
    cursor: usize,
}

impl TextPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_line_start(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = self.line_start(row);
    }

    pub fn move_line_end(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = self.line_start(row) + self.line_len(row);
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row > 0 {
            self.cursor = self.line_start(row - 1) + col.min(self.line_len(row - 1));
        }
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 < self.line_count() {
            self.cursor = self.line_start(row + 1) + col.min(self.line_len(row + 1));
        }
    }

    /// Zero-based (row, column) of the cursor, both counted in chars.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// Number of lines; an empty buffer has one.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_len(&self, row: usize) -> usize {
        self.text
            .split('\n')
            .nth(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    fn line_start(&self, row: usize) -> usize {
        self.text
            .split('\n')
            .take(row)
            .map(|line| line.chars().count() + 1)
            .sum()
    }
}

impl EditorSurface for TextPane {
    fn get_rich_text(&self) -> String {
        self.text.clone()
    }

    fn set_rich_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_len();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
