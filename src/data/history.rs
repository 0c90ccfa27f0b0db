//! Center-of-mass history.

use ndarray::Array2;
use std::path::PathBuf;

/// Number of columns in a history row.
pub const HISTORY_COLUMNS: usize = 3;

/// A column of the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Simulation time (column 0).
    Time,
    /// x component of the center of mass (column 1).
    XCm,
    /// y component of the center of mass (column 2).
    YCm,
}

impl Column {
    /// Position of the column in a row.
    pub fn index(self) -> usize {
        match self {
            Column::Time => 0,
            Column::XCm => 1,
            Column::YCm => 2,
        }
    }

    /// Get column name.
    pub fn name(self) -> &'static str {
        match self {
            Column::Time => "t",
            Column::XCm => "x_cm",
            Column::YCm => "y_cm",
        }
    }
}

/// A loaded center-of-mass history: three equal-length columns in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmHistory {
    /// Path to the source file, if loaded from disk.
    pub file_path: Option<PathBuf>,
    t: Vec<f64>,
    x_cm: Vec<f64>,
    y_cm: Vec<f64>,
}

impl CmHistory {
    /// Unpack a `(rows, 3)` table column-wise.
    pub fn from_table(table: &Array2<f64>) -> Self {
        debug_assert_eq!(table.ncols(), HISTORY_COLUMNS);
        let column = |c: Column| table.column(c.index()).to_vec();
        Self {
            file_path: None,
            t: column(Column::Time),
            x_cm: column(Column::XCm),
            y_cm: column(Column::YCm),
        }
    }

    /// Attach the source path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True if the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Time column.
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// x_cm column.
    pub fn x_cm(&self) -> &[f64] {
        &self.x_cm
    }

    /// y_cm column.
    pub fn y_cm(&self) -> &[f64] {
        &self.y_cm
    }

    /// Borrow a column by name.
    pub fn column(&self, column: Column) -> &[f64] {
        match column {
            Column::Time => &self.t,
            Column::XCm => &self.x_cm,
            Column::YCm => &self.y_cm,
        }
    }

    /// Iterate rows as `(t, x_cm, y_cm)`.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.t
            .iter()
            .zip(&self.x_cm)
            .zip(&self.y_cm)
            .map(|((&t, &x), &y)| (t, x, y))
    }

    /// Display name of the source file.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}
