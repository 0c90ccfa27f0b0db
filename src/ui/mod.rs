//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI: chart, status bar, keymap bar.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    chart::draw_chart(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlotConfig, SeriesSelection};
    use crate::data::HistoryReader;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn app_for(text: &str) -> App {
        let history = HistoryReader::parse_str(text).unwrap();
        App::new(history, &PlotConfig::default())
    }

    #[test]
    fn renders_title_legend_and_bars() {
        let app = app_for("0.0 1.0 2.0\n1.0 1.1 2.2\n2.0 1.2 2.4\n");
        let screen = render(&app);

        assert!(screen[0].contains("<memory>: y_cm vs t (3 points)"));
        assert!(screen.iter().any(|row| row.contains("y_cm")));
        assert!(screen[22].contains("3 rows"));
        assert!(screen[22].contains("fullscreen"));
        assert!(screen[23].contains("q/Esc:quit"));
    }

    #[test]
    fn empty_history_renders_empty_chart() {
        let app = app_for("");
        let screen = render(&app);
        assert!(screen[0].contains("(no data)"));
        assert!(screen[22].contains("0 rows"));
    }

    #[test]
    fn both_series_show_both_legends() {
        let mut app = app_for("0.0 1.0 2.0\n1.0 1.1 2.2\n2.0 1.2 2.4\n");
        app.series = SeriesSelection::Both;
        let screen = render(&app);
        assert!(screen[0].contains("x_cm + y_cm vs t (6 points)"));
        assert!(screen.iter().any(|row| row.contains("x_cm")));
    }

    #[test]
    fn extreme_magnitudes_render_without_overflow() {
        let inputs = [
            "0 0 1.7e308\n",
            "0 0 -1.7e308\n1 0 1.7e308\n",
            "0 -1e300 1e300\n1 0 0\n",
        ];
        for text in inputs {
            let mut app = app_for(text);
            app.series = SeriesSelection::Both;
            let screen = render(&app);
            assert!(screen[0].contains("vs t"));
        }
    }

    #[test]
    fn plotted_cells_are_drawn() {
        let app = app_for("0.0 1.0 2.0\n1.0 1.1 2.2\n2.0 1.2 2.4\n");
        let screen = render(&app);
        let braille = screen
            .iter()
            .flat_map(|row| row.chars())
            .filter(|c| ('\u{2801}'..='\u{28FF}').contains(c))
            .count();
        assert!(braille > 0);
    }
}
