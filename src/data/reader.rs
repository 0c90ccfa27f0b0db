//! Whitespace-delimited history file reader.

use super::{CmHistory, HISTORY_COLUMNS};
use crate::error::{CmPlotError, Result};
use ndarray::Array2;
use std::path::Path;

/// Comment marker; everything after it on a line is ignored.
const COMMENT: char = '#';

/// Center-of-mass history reader.
#[derive(Debug)]
pub struct HistoryReader;

impl HistoryReader {
    /// Read a history file from disk.
    pub fn read_file(path: &Path) -> Result<CmHistory> {
        let bytes =
            std::fs::read(path).map_err(|e| CmPlotError::file_open(path.to_path_buf(), e))?;

        let table = Self::parse_bytes(&bytes)?;
        let history = CmHistory::from_table(&table).with_path(path.to_path_buf());
        tracing::info!("Loaded {} rows from {}", history.len(), path.display());
        Ok(history)
    }

    /// Parse history text already in memory.
    pub fn parse_str(text: &str) -> Result<CmHistory> {
        let table = Self::parse_table(text)?;
        Ok(CmHistory::from_table(&table))
    }

    /// Parse text into a `(rows, 3)` table.
    pub fn parse_table(text: &str) -> Result<Array2<f64>> {
        Self::parse_bytes(text.as_bytes())
    }

    /// Parse raw file contents into a `(rows, 3)` table.
    ///
    /// Lines are decoded one at a time, so invalid UTF-8 is reported as a
    /// parse error on the line that contains it.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Array2<f64>> {
        let mut values = Vec::new();
        let mut rows = 0;

        for (idx, chunk) in bytes.split(|&b| b == b'\n').enumerate() {
            let line_no = idx + 1;
            let raw = std::str::from_utf8(chunk)
                .map_err(|e| CmPlotError::parse(line_no, format!("invalid UTF-8: {}", e)))?;
            let line = match raw.find(COMMENT) {
                Some(pos) => &raw[..pos],
                None => raw,
            };

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != HISTORY_COLUMNS {
                return Err(CmPlotError::parse(
                    line_no,
                    format!(
                        "expected {} columns, found {}",
                        HISTORY_COLUMNS,
                        fields.len()
                    ),
                ));
            }

            for field in fields {
                let value = field.parse::<f64>().map_err(|_| {
                    CmPlotError::parse(
                        line_no,
                        format!("could not convert '{}' to a number", field),
                    )
                })?;
                values.push(value);
            }
            rows += 1;
        }

        tracing::debug!("Parsed {} data rows", rows);

        Array2::from_shape_vec((rows, HISTORY_COLUMNS), values)
            .map_err(|e| CmPlotError::parse(rows, e.to_string()))
    }
}
