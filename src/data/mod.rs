//! Data reading and representation.
//!
//! This module reads center-of-mass history files and holds their columns.

mod history;
mod reader;

pub use history::{CmHistory, Column, HISTORY_COLUMNS};
pub use reader::HistoryReader;
