//! Application state and logic.

use crate::config::{MarkerStyle, PlotConfig, RenderBackend, SeriesSelection};
use crate::data::CmHistory;
use crate::plot::ChartModel;
use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded history.
    pub history: CmHistory,
    /// Series currently plotted.
    pub series: SeriesSelection,
    /// Marker used for the lines.
    pub marker: MarkerStyle,
    /// Current theme.
    pub theme: Theme,
    /// Backend the chart is displayed in.
    pub backend: RenderBackend,
    /// Y axis padding factor.
    pub y_padding: f64,
    /// Status message.
    pub status: String,
    /// Set once the user dismisses the window.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(history: CmHistory, config: &PlotConfig) -> Self {
        let status = format!("{} loaded ({} rows)", history.display_name(), history.len());
        Self {
            history,
            series: config.series,
            marker: config.marker,
            theme: config.theme,
            backend: config.backend,
            y_padding: config.layout.y_axis_padding_factor,
            status,
            should_quit: false,
        }
    }

    /// Chart for the current selection.
    pub fn chart(&self) -> ChartModel {
        ChartModel::build(&self.history, self.series, self.y_padding)
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.quit(),

            // Series
            (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('s')) => {
                self.cycle_series();
            },

            // Appearance
            (KeyModifiers::NONE, KeyCode::Char('m')) => self.cycle_marker(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                self.cycle_theme();
            },

            _ => {},
        }
    }

    /// Dismiss the window.
    pub fn quit(&mut self) {
        tracing::debug!("Quit requested");
        self.should_quit = true;
    }

    /// Cycle to the next series selection.
    pub fn cycle_series(&mut self) {
        self.series = self.series.next();
        self.status = format!("Series: {}", self.series.name());
    }

    /// Cycle to the next marker style.
    pub fn cycle_marker(&mut self) {
        self.marker = self.marker.next();
        self.status = format!("Marker: {}", self.marker.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Column, HistoryReader};

    fn app() -> App {
        let history = HistoryReader::parse_str("0.0 1.0 2.0\n1.0 1.1 2.2\n2.0 1.2 2.4\n").unwrap();
        App::new(history, &PlotConfig::default())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn starts_on_y_series() {
        let app = app();
        let chart = app.chart();
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].column, Column::YCm);
        assert!(app.status.contains("3 rows"));
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        for (code, modifiers) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            press(&mut app, code, modifiers);
            assert!(app.should_quit, "{code:?} should quit");
        }
    }

    #[test]
    fn tab_cycles_series() {
        let mut app = app();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.series, SeriesSelection::X);
        assert_eq!(app.status, "Series: x_cm");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(app.series, SeriesSelection::Both);
        assert_eq!(app.chart().series.len(), 2);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.series, SeriesSelection::Y);
    }

    #[test]
    fn theme_and_marker_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(app.theme, Theme::GruvboxLight);
        press(&mut app, KeyCode::Char('m'), KeyModifiers::NONE);
        assert_eq!(app.marker, MarkerStyle::Dot);
        assert_eq!(app.status, "Marker: Dot");
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('z'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.series, SeriesSelection::Y);
    }
}
