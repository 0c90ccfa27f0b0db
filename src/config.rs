//! Plot configuration.
//!
//! Every knob the viewer exposes lives here with its default. The enums derive
//! `clap::ValueEnum` so the command line maps straight onto them.

use crate::app::Theme;
use crate::data::Column;
use clap::ValueEnum;
use ratatui::symbols::Marker;
use std::path::PathBuf;

/// Default history file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "cm_history.txt";

/// Interactive rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderBackend {
    /// Alternate screen, chart fills the terminal.
    #[default]
    Fullscreen,
    /// Fixed-height viewport below the cursor; the chart stays in scrollback.
    Inline,
}

impl RenderBackend {
    /// Get backend name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Inline => "inline",
        }
    }
}

/// Which center-of-mass component(s) to plot against time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SeriesSelection {
    /// y_cm only.
    #[default]
    Y,
    /// x_cm only.
    X,
    /// Both components.
    Both,
}

impl SeriesSelection {
    /// Get the next selection in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Y => Self::X,
            Self::X => Self::Both,
            Self::Both => Self::Y,
        }
    }

    /// Columns drawn for this selection, in draw order.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Y => &[Column::YCm],
            Self::X => &[Column::XCm],
            Self::Both => &[Column::XCm, Column::YCm],
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Y => "y_cm",
            Self::X => "x_cm",
            Self::Both => "x_cm + y_cm",
        }
    }
}

/// Point marker used to draw the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MarkerStyle {
    /// Braille patterns (highest resolution).
    #[default]
    Braille,
    /// Single dots.
    Dot,
    /// Full blocks.
    Block,
    /// Half blocks (double vertical resolution).
    HalfBlock,
}

impl MarkerStyle {
    /// Get the next marker in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Braille => Self::Dot,
            Self::Dot => Self::Block,
            Self::Block => Self::HalfBlock,
            Self::HalfBlock => Self::Braille,
        }
    }

    /// Get marker name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Braille => "Braille",
            Self::Dot => "Dot",
            Self::Block => "Block",
            Self::HalfBlock => "Half block",
        }
    }

    /// The ratatui marker for this style.
    pub fn symbol(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::Dot => Marker::Dot,
            Self::Block => Marker::Block,
            Self::HalfBlock => Marker::HalfBlock,
        }
    }
}

/// Layout constants for the chart.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Padding factor for the y axis (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
    /// Height of the inline viewport in rows.
    pub inline_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            inline_height: 20,
        }
    }
}

/// Complete configuration for one run of the plotter.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// History file to load.
    pub data_path: PathBuf,
    /// Rendering backend.
    pub backend: RenderBackend,
    /// Initially plotted series.
    pub series: SeriesSelection,
    /// Initial marker style.
    pub marker: MarkerStyle,
    /// Initial theme.
    pub theme: Theme,
    /// Layout constants.
    pub layout: LayoutConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            backend: RenderBackend::default(),
            series: SeriesSelection::default(),
            marker: MarkerStyle::default(),
            theme: Theme::default(),
            layout: LayoutConfig::default(),
        }
    }
}
