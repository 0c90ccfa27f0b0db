//! Line chart of the center-of-mass history.

use super::formatters::{format_axis_label, format_number};
use super::ThemeColors;
use crate::app::App;
use crate::config::SeriesSelection;
use crate::data::Column;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Draw the chart into `area`.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let model = app.chart();

    let datasets: Vec<Dataset<'_>> = model
        .series
        .iter()
        .map(|series| {
            Dataset::default()
                .name(series.column.name())
                .marker(app.marker.symbol())
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.series(series.column)))
                .data(&series.points)
        })
        .collect();

    let [x_min, x_max] = model.x_bounds;
    let x_axis = Axis::default()
        .title(Column::Time.name())
        .style(Style::default().fg(colors.label))
        .bounds(model.x_bounds)
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_title = match app.series {
        SeriesSelection::Both => "cm",
        selection => selection.name(),
    };
    let [y_min, y_max] = model.y_bounds;
    let y_axis = Axis::default()
        .title(y_title)
        .style(Style::default().fg(colors.label))
        .bounds(model.y_bounds)
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let title = if model.is_empty() {
        format!(" {}: {} vs t (no data) ", app.history.display_name(), app.series.name())
    } else {
        format!(
            " {}: {} vs t ({} points) ",
            app.history.display_name(),
            app.series.name(),
            format_number(model.point_count())
        )
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
