//! Error types for cmplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cmplot operations.
pub type Result<T> = std::result::Result<T, CmPlotError>;

/// Errors that can occur in cmplot.
#[derive(Debug, Error)]
pub enum CmPlotError {
    /// Failed to open or read the history file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A row of the history file is malformed.
    #[error("Parse error on line {line}: {reason}")]
    Parse {
        /// 1-based physical line number.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// The requested rendering backend could not be started.
    #[error("Backend initialization failed: {0}")]
    BackendInit(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl CmPlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create a BackendInit error.
    pub fn backend_init(reason: impl Into<String>) -> Self {
        Self::BackendInit(reason.into())
    }
}
