//! Color themes for the UI.

use crate::app::Theme;
use crate::data::Column;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Chart title color.
    pub heading: Color,
    /// Axis label color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Line color for y_cm.
    pub series_y: Color,
    /// Line color for x_cm.
    pub series_x: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(250, 189, 47),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                series_y: Color::Rgb(131, 165, 152),
                series_x: Color::Rgb(254, 128, 25),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(168, 153, 132),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(181, 118, 20),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                series_y: Color::Rgb(7, 102, 120),
                series_x: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(124, 111, 100),
            },
        }
    }

    /// Line color for a plotted column.
    pub fn series(&self, column: Column) -> Color {
        match column {
            Column::XCm => self.series_x,
            Column::YCm | Column::Time => self.series_y,
        }
    }
}
