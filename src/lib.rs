//! cmplot - a terminal line plot of a center-of-mass history.
//!
//! Reads a whitespace-delimited file of `t x_cm y_cm` rows and draws `y_cm`
//! (or `x_cm`, or both) against time in an interactive terminal chart.
//!
//! # Example
//!
//! ```ignore
//! use cmplot::config::PlotConfig;
//!
//! // Plot ./cm_history.txt fullscreen until the user presses q
//! cmplot::viewer::run(&PlotConfig::default())?;
//! ```
//!
//! Loading on its own needs no terminal:
//!
//! ```
//! use cmplot::data::HistoryReader;
//!
//! let history = HistoryReader::parse_str("0.0 1.0 2.0\n1.0 1.1 2.2\n").unwrap();
//! assert_eq!(history.y_cm(), &[2.0, 2.2]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod terminal;
pub mod ui;
pub mod viewer;

pub use error::{CmPlotError, Result};
