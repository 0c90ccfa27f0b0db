//! Status bar UI component.

use crate::app::App;
use crate::ui::formatters::format_number;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Status line text.
pub(super) fn status_text(app: &App) -> String {
    format!(
        "{} | {} rows | {} | {}",
        app.status,
        format_number(app.history.len()),
        app.series.name(),
        app.backend.name()
    )
}

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let paragraph = Paragraph::new(status_text(app))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
