//! Accent color themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Accent color for card borders, values and the help line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Accent as an RGB color, so it can be faded.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Cyan => (0, 255, 255),
            ColorTheme::Green => (80, 250, 123),
            ColorTheme::White => (235, 235, 235),
            ColorTheme::Magenta => (255, 85, 255),
            ColorTheme::Yellow => (255, 215, 0),
            ColorTheme::Red => (255, 85, 85),
            ColorTheme::Blue => (100, 149, 237),
        }
    }
}
