//! Color definitions for cardquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the cardquill terminal UI. Colors are organized into three
//! categories: card panes, general UI elements, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a cardquill theme.
///
/// # Examples
///
/// ```
/// use cardquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Card pane colors
    /// Title of the question pane.
    pub question_title: Color,
    /// Title of the answer pane.
    pub answer_title: Color,
    /// Border of the pane that does not have focus.
    pub pane_border: Color,
    /// Border of the pane receiving keyboard input.
    pub focused_border: Color,
    /// Placeholder text shown while the answer is hidden.
    pub hidden_placeholder: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Color for the text cursor and command prompt cursor.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the actual values follow the user's terminal
    /// palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            question_title: Color::LightBlue,
            answer_title: Color::Green,
            pane_border: Color::DarkGray,
            focused_border: Color::LightBlue,
            hidden_placeholder: Color::DarkGray,

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            question_title: Color::Rgb(166, 38, 164),
            answer_title: Color::Rgb(80, 161, 79),
            pane_border: Color::Rgb(200, 200, 200),
            focused_border: Color::Rgb(82, 139, 255),
            hidden_placeholder: Color::DarkGray,

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            question_title: Color::Rgb(251, 184, 108), // orange
            answer_title: Color::Rgb(184, 187, 38),    // green
            pane_border: Color::Rgb(146, 131, 116),    // gray
            focused_border: Color::Rgb(251, 184, 108), // orange
            hidden_placeholder: Color::Rgb(146, 131, 116),

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            question_title: Color::Rgb(136, 192, 208), // frost cyan
            answer_title: Color::Rgb(163, 190, 140),   // aurora green
            pane_border: Color::Rgb(76, 86, 106),      // polar night gray
            focused_border: Color::Rgb(136, 192, 208),
            hidden_placeholder: Color::Rgb(76, 86, 106),

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(136, 192, 208),
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            question_title: Color::Rgb(139, 233, 253), // cyan
            answer_title: Color::Rgb(80, 250, 123),    // green
            pane_border: Color::Rgb(98, 114, 164),     // comment
            focused_border: Color::Rgb(189, 147, 249), // purple
            hidden_placeholder: Color::Rgb(98, 114, 164),

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(189, 147, 249),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }
}
