/// Core data types for the page-view chart generator.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types (plus chrono's date type).

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Name of the date column in the source CSV. Doubles as the table index.
pub const COL_DATE: &str = "date";

/// Name of the page-view count column in the source CSV.
pub const COL_VALUE: &str = "value";

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// A single day's page-view count.
///
/// Corresponds to one data row of the source CSV. Dates are unique and
/// chronologically ordered on disk, so a `Vec<PageView>` produced by the
/// loader is already sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub date: NaiveDate,
    pub value: f64,
}

/// The inclusive value band a record must fall into to survive cleaning.
///
/// Produced by `analysis::outliers::clean_bounds` from the full raw table.
/// Both comparisons are inclusive: a record exactly at a bound is retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanBounds {
    pub lower: f64,
    pub upper: f64,
}

impl CleanBounds {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or loading the page-view dataset.
#[derive(Debug, PartialEq)]
pub enum DatasetError {
    /// Non-2xx HTTP response from the dataset host.
    Http(u16),
    /// The destination CSV does not exist on disk.
    MissingFile(String),
    /// The CSV could not be read for a reason other than absence.
    Io(String),
    /// A header or data line could not be parsed. `line` is 1-based.
    Parse { line: usize, message: String },
    /// The CSV had a valid header but no data rows.
    EmptyDataset,
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Http(code) => write!(f, "HTTP error: {}", code),
            DatasetError::MissingFile(path) => write!(f, "File not found: {}", path),
            DatasetError::Io(msg) => write!(f, "I/O error: {}", msg),
            DatasetError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            DatasetError::EmptyDataset => write!(f, "Dataset contains no data rows"),
        }
    }
}

impl std::error::Error for DatasetError {}
