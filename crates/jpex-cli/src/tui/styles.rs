//! TUI theming and styles
//!
//! Centralized color palette and style helpers so every widget draws from
//! the same theme.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

/// Color palette for the session.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    /// Primary brand color (banner, highlights)
    pub primary: Color,
    /// Success state
    pub success: Color,
    /// Error state
    pub error: Color,
    /// Primary text color
    pub text_primary: Color,
    /// Secondary/muted text
    pub text_secondary: Color,
    /// Border color
    pub border: Color,
    /// Border color for the focused pane
    pub border_focused: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Palette for dark terminal backgrounds (default)
    pub const fn dark() -> Self {
        Self {
            primary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
        }
    }

    /// Palette for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,
        }
    }
}

/// Reusable style definitions.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Color palette
    pub palette: ColorPalette,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorPalette::default())
    }
}

impl Styles {
    /// Create styles with the given palette
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Styles for the configured theme
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::new(ColorPalette::dark()),
            Theme::Light => Self::new(ColorPalette::light()),
        }
    }

    /// Style for normal text
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    /// Style for muted/secondary text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    /// Style for highlighted text
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn text_success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    /// Style for error messages
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }

    /// Style for normal borders
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    /// Style for focused borders
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.palette.border_focused)
    }
}
