//! Color system
//! Color and style types shared by the screen grid and the renderer

use crossterm::style::Color as CrosstermColor;

/// Color representation wrapping crossterm's Color enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Reset to default color
    Reset,
    /// Standard 16 colors
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// 256-color palette (0-255)
    Ansi256(u8),
}

impl Color {
    /// Convert to crossterm Color
    #[must_use]
    pub fn to_crossterm(self) -> CrosstermColor {
        match self {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Ansi256(n) => CrosstermColor::AnsiValue(n),
        }
    }
}

/// Text style for a screen cell: colors plus the bold attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color (None means terminal default)
    pub fg: Option<Color>,
    /// Background color (None means terminal default)
    pub bg: Option<Color>,
    /// Bold attribute
    pub bold: bool,
}

impl Style {
    /// Style with foreground color only
    #[must_use]
    pub fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            ..Style::default()
        }
    }

    /// Style with foreground and background colors
    #[must_use]
    pub fn new(fg: Color, bg: Color) -> Self {
        Style {
            fg: Some(fg),
            bg: Some(bg),
            bold: false,
        }
    }

    /// Return a copy with the bold attribute set
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}
