/// CSV loader for the cached page-view dataset.
///
/// Parses the two-column `date,value` file written by the fetcher into a
/// date-ordered `Vec<PageView>`. The header is matched exactly — no header
/// variation is tolerated — and every data line must carry an ISO date and
/// a numeric value. Parse failures name the offending 1-based line.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;

use crate::model::{COL_DATE, COL_VALUE, DatasetError, PageView};

/// Date format of the index column, e.g. "2016-05-09".
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read and parse the dataset CSV at `path`.
///
/// A missing file maps to `DatasetError::MissingFile` so the orchestrator's
/// pre-check and the loader agree on what absence looks like.
pub fn load_pageviews(path: &Path) -> Result<Vec<PageView>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DatasetError::MissingFile(path.display().to_string()),
        _ => DatasetError::Io(e.to_string()),
    })?;

    parse_pageviews_csv(&text)
}

/// Parse CSV text into page-view records, preserving row order.
pub fn parse_pageviews_csv(text: &str) -> Result<Vec<PageView>, DatasetError> {
    let expected_header = format!("{},{}", COL_DATE, COL_VALUE);
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;

        if i == 0 {
            if line.trim() != expected_header {
                return Err(DatasetError::Parse {
                    line: line_no,
                    message: format!("expected header '{}', got '{}'", expected_header, line),
                });
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 {
            return Err(DatasetError::Parse {
                line: line_no,
                message: format!("expected 2 fields, got {}", fields.len()),
            });
        }

        let date = NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT).map_err(|e| {
            DatasetError::Parse {
                line: line_no,
                message: format!("bad date '{}': {}", fields[0], e),
            }
        })?;

        let value: f64 = fields[1].trim().parse().map_err(|e| DatasetError::Parse {
            line: line_no,
            message: format!("bad value '{}': {}", fields[1], e),
        })?;

        rows.push(PageView { date, value });
    }

    if rows.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    Ok(rows)
}
