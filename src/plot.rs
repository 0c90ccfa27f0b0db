//! Chart model.
//!
//! Turns a loaded history into the point series and axis bounds the chart
//! widget draws. Nothing here touches the terminal.

use crate::config::SeriesSelection;
use crate::data::{CmHistory, Column};

/// Bounds used when there is nothing finite to scale against.
const EMPTY_BOUNDS: [f64; 2] = [0.0, 1.0];

/// Largest magnitude drawn. The chart scales `(v - min) * width` in f64, so
/// the axis span must stay far enough below `f64::MAX` for that to be finite.
pub const AXIS_LIMIT: f64 = 1e300;

/// Ordered `(t, value)` pairs for one column, in file row order.
pub fn series_points(history: &CmHistory, column: Column) -> Vec<(f64, f64)> {
    history
        .t()
        .iter()
        .copied()
        .zip(history.column(column).iter().copied())
        .collect()
}

/// One drawable line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column plotted on the vertical axis.
    pub column: Column,
    /// Drawable points in row order.
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Lines to draw, in draw order.
    pub series: Vec<Series>,
    /// Horizontal (time) bounds.
    pub x_bounds: [f64; 2],
    /// Vertical bounds, padded.
    pub y_bounds: [f64; 2],
}

impl ChartModel {
    /// Build the chart for the given selection.
    ///
    /// Non-finite values and values beyond [`AXIS_LIMIT`] are left out of the
    /// drawn points and the bounds. Degenerate ranges are widened so both axes
    /// stay non-empty.
    pub fn build(history: &CmHistory, selection: SeriesSelection, y_padding: f64) -> Self {
        let series: Vec<Series> = selection
            .columns()
            .iter()
            .map(|&column| Series {
                column,
                points: series_points(history, column)
                    .into_iter()
                    .filter(|&(x, y)| drawable(x) && drawable(y))
                    .collect(),
            })
            .collect();

        let xs = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
        let ys = series.iter().flat_map(|s| s.points.iter().map(|p| p.1));

        let x_bounds = widen(min_max(xs));
        let y_bounds = match min_max(ys) {
            Some((min, max)) => {
                let padding = (max - min).abs() * y_padding;
                widen(Some((min - padding, max + padding)))
            },
            None => EMPTY_BOUNDS,
        };

        Self {
            series,
            x_bounds,
            y_bounds,
        }
    }

    /// Total number of drawn points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// True if no series has a point.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

fn drawable(v: f64) -> bool {
    v.is_finite() && v.abs() <= AXIS_LIMIT
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

fn widen(range: Option<(f64, f64)>) -> [f64; 2] {
    let [lo, hi] = match range {
        None => return EMPTY_BOUNDS,
        Some((min, max)) if max > min => [min, max],
        Some((v, _)) => {
            let half = if v == 0.0 { 0.5 } else { v.abs() * 0.05 };
            [v - half, v + half]
        },
    };
    [lo.max(-AXIS_LIMIT), hi.min(AXIS_LIMIT)]
}

/// Statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Column described.
    pub column: Column,
    /// Minimum and maximum of finite values.
    pub min_max: Option<(f64, f64)>,
    /// Mean of finite values.
    pub mean: Option<f64>,
    /// Count of finite values.
    pub valid_count: usize,
}

impl ColumnStats {
    /// Compute statistics for a column.
    pub fn of(history: &CmHistory, column: Column) -> Self {
        let finite: Vec<f64> = history
            .column(column)
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let mean = if finite.is_empty() {
            None
        } else {
            Some(finite.iter().sum::<f64>() / finite.len() as f64)
        };
        Self {
            column,
            min_max: min_max(finite.iter().copied()),
            mean,
            valid_count: finite.len(),
        }
    }
}

/// Textual overview of a loaded history.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Source name.
    pub name: String,
    /// Number of rows.
    pub rows: usize,
    /// Per-column statistics, in file column order.
    pub columns: Vec<ColumnStats>,
}

impl Summary {
    /// Summarize a history.
    pub fn of(history: &CmHistory) -> Self {
        Self {
            name: history.display_name(),
            rows: history.len(),
            columns: [Column::Time, Column::XCm, Column::YCm]
                .into_iter()
                .map(|c| ColumnStats::of(history, c))
                .collect(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::ui::formatters::format_stat_value;

        writeln!(f, "file: {}", self.name)?;
        writeln!(f, "rows: {}", self.rows)?;
        for stats in &self.columns {
            match (stats.min_max, stats.mean) {
                (Some((min, max)), Some(mean)) => writeln!(
                    f,
                    "{:>5}: min={} max={} mean={}",
                    stats.column.name(),
                    format_stat_value(min),
                    format_stat_value(max),
                    format_stat_value(mean)
                )?,
                _ => writeln!(f, "{:>5}: no data", stats.column.name())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HistoryReader;

    fn example() -> CmHistory {
        HistoryReader::parse_str("0.0 1.0 2.0\n1.0 1.1 2.2\n2.0 1.2 2.4\n").unwrap()
    }

    #[test]
    fn y_series_pairs_time_with_y_cm() {
        let points = series_points(&example(), Column::YCm);
        assert_eq!(points, vec![(0.0, 2.0), (1.0, 2.2), (2.0, 2.4)]);
    }

    #[test]
    fn points_keep_row_order() {
        let history = HistoryReader::parse_str("2 0 5\n0 0 6\n1 0 7\n").unwrap();
        let points = series_points(&history, Column::YCm);
        assert_eq!(points, vec![(2.0, 5.0), (0.0, 6.0), (1.0, 7.0)]);
    }

    #[test]
    fn default_chart_draws_only_y() {
        let model = ChartModel::build(&example(), SeriesSelection::Y, 0.0);
        assert_eq!(model.series.len(), 1);
        assert_eq!(model.series[0].column, Column::YCm);
        assert_eq!(model.point_count(), 3);
        assert_eq!(model.x_bounds, [0.0, 2.0]);
        assert_eq!(model.y_bounds, [2.0, 2.4]);
    }

    #[test]
    fn y_bounds_are_padded() {
        let model = ChartModel::build(&example(), SeriesSelection::Y, 0.5);
        let [lo, hi] = model.y_bounds;
        assert!((lo - 1.8).abs() < 1e-9);
        assert!((hi - 2.6).abs() < 1e-9);
    }

    #[test]
    fn both_series_share_bounds() {
        let model = ChartModel::build(&example(), SeriesSelection::Both, 0.0);
        assert_eq!(model.series.len(), 2);
        assert_eq!(model.series[0].column, Column::XCm);
        assert_eq!(model.series[1].column, Column::YCm);
        assert_eq!(model.y_bounds, [1.0, 2.4]);
    }

    #[test]
    fn empty_history_gives_empty_chart() {
        let history = HistoryReader::parse_str("").unwrap();
        let model = ChartModel::build(&history, SeriesSelection::Y, 0.1);
        assert!(model.is_empty());
        assert_eq!(model.x_bounds, [0.0, 1.0]);
        assert_eq!(model.y_bounds, [0.0, 1.0]);
    }

    #[test]
    fn single_row_widens_bounds() {
        let history = HistoryReader::parse_str("4.0 0.0 0.0\n").unwrap();
        let model = ChartModel::build(&history, SeriesSelection::Y, 0.1);
        assert!(model.x_bounds[0] < 4.0 && model.x_bounds[1] > 4.0);
        assert_eq!(model.y_bounds, [-0.5, 0.5]);
    }

    #[test]
    fn non_finite_values_are_not_drawn() {
        let history = HistoryReader::parse_str("0 0 1\n1 0 nan\n2 0 inf\n3 0 2\n").unwrap();
        let model = ChartModel::build(&history, SeriesSelection::Y, 0.0);
        assert_eq!(model.series[0].points, vec![(0.0, 1.0), (3.0, 2.0)]);
        assert_eq!(model.y_bounds, [1.0, 2.0]);
        // The loaded column itself is untouched.
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn huge_values_keep_bounds_finite() {
        let history = HistoryReader::parse_str("0 0 -1e300\n1 0 1e300\n").unwrap();
        let model = ChartModel::build(&history, SeriesSelection::Y, 0.1);
        assert_eq!(model.y_bounds, [-AXIS_LIMIT, AXIS_LIMIT]);
        assert_eq!(model.point_count(), 2);

        let history = HistoryReader::parse_str("0 0 1e300\n").unwrap();
        let [lo, hi] = ChartModel::build(&history, SeriesSelection::Y, 0.1).y_bounds;
        assert!(lo < hi && hi <= AXIS_LIMIT);
    }

    #[test]
    fn values_near_f64_max_are_not_drawn() {
        let history =
            HistoryReader::parse_str("0 0 -1.7e308\n1 0 1.7e308\n2 0 5\n3 0 6\n").unwrap();
        let model = ChartModel::build(&history, SeriesSelection::Y, 0.1);
        assert_eq!(model.series[0].points, vec![(2.0, 5.0), (3.0, 6.0)]);
        assert!(model.y_bounds.iter().all(|b| b.is_finite()));
        assert!(model.x_bounds.iter().all(|b| b.is_finite()));
    }

    #[test]
    fn summary_reports_rows_and_ranges() {
        let summary = Summary::of(&example());
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns[0].min_max, Some((0.0, 2.0)));
        assert_eq!(summary.columns[2].valid_count, 3);

        let text = summary.to_string();
        assert!(text.contains("rows: 3"));
        assert!(text.contains("y_cm: min=2.0000 max=2.4000"));
    }

    #[test]
    fn summary_of_empty_history() {
        let history = HistoryReader::parse_str("").unwrap();
        let text = Summary::of(&history).to_string();
        assert!(text.contains("rows: 0"));
        assert!(text.contains("t: no data"));
    }
}
