/// Outlier removal by quantile band.
///
/// The cleaned table is the raw table minus rows whose value falls outside
/// the inclusive [2.5th, 97.5th] percentile range, computed over the full
/// table. Order and dates are untouched. The cleaned view is derived and
/// recomputed on every run — nothing is cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::quantile;
use crate::model::{CleanBounds, PageView};

/// Lower cut: values below the 2.5th percentile are outliers.
pub const LOWER_QUANTILE: f64 = 0.025;

/// Upper cut: values above the 97.5th percentile are outliers.
pub const UPPER_QUANTILE: f64 = 0.975;

// ---------------------------------------------------------------------------
// Cleaning summary
// ---------------------------------------------------------------------------

/// What a cleaning pass did, for console reporting and the run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub rows_in: usize,
    pub rows_retained: usize,
    pub rows_removed: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Compute the inclusive value band for `rows` from the fixed quantiles.
pub fn clean_bounds(rows: &[PageView]) -> CleanBounds {
    let sorted = quantile::sorted_values(rows);
    CleanBounds {
        lower: quantile::quantile(&sorted, LOWER_QUANTILE),
        upper: quantile::quantile(&sorted, UPPER_QUANTILE),
    }
}

/// Remove outlier rows, preserving input order and the date index.
///
/// Records exactly at a bound are retained. Bounds are a pure function of
/// the input values, so two runs over the same raw table produce the same
/// cleaned table.
pub fn clean_pageviews(rows: &[PageView]) -> (Vec<PageView>, CleaningSummary) {
    let bounds = clean_bounds(rows);

    let retained: Vec<PageView> = rows
        .iter()
        .filter(|r| bounds.contains(r.value))
        .cloned()
        .collect();

    let summary = CleaningSummary {
        rows_in: rows.len(),
        rows_retained: retained.len(),
        rows_removed: rows.len() - retained.len(),
        lower_bound: bounds.lower,
        upper_bound: bounds.upper,
        first_date: retained.first().map(|r| r.date),
        last_date: retained.last().map(|r| r.date),
    };

    (retained, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_rows(values: &[f64]) -> Vec<PageView> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| PageView {
                date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap() + chrono::Days::new(i as u64),
                value,
            })
            .collect()
    }

    #[test]
    fn test_extreme_outlier_is_removed() {
        // Nine ordinary days and one at ~1000x the median.
        let rows = daily_rows(&[
            100.0, 101.0, 99.0, 102.0, 98.0, 100.0, 103.0, 97.0, 101.0, 100_000.0,
        ]);

        let (clean, summary) = clean_pageviews(&rows);

        assert!(clean.iter().all(|r| r.value < 1000.0));
        assert_eq!(summary.rows_in, 10);
        assert_eq!(summary.rows_retained + summary.rows_removed, 10);
        assert!(summary.rows_removed >= 1);
    }

    #[test]
    fn test_retained_values_stay_within_bounds() {
        let rows = daily_rows(&[5.0, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0, 1000.0]);

        let bounds = clean_bounds(&rows);
        let (clean, _) = clean_pageviews(&rows);

        assert!(clean.len() <= rows.len());
        for row in &clean {
            assert!(bounds.contains(row.value));
        }
    }

    #[test]
    fn test_order_and_dates_preserved() {
        let rows = daily_rows(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let (clean, _) = clean_pageviews(&rows);

        for pair in clean.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_identical_values_all_retained() {
        // Both bounds collapse onto the single value; inclusive comparison
        // keeps every row.
        let rows = daily_rows(&[42.0; 8]);
        let (clean, summary) = clean_pageviews(&rows);

        assert_eq!(clean.len(), 8);
        assert_eq!(summary.rows_removed, 0);
    }

    #[test]
    fn test_cleaning_is_reproducible_across_runs() {
        let values: Vec<f64> = (0..200).map(|i| ((i * 37) % 997) as f64).collect();
        let rows = daily_rows(&values);

        let (first, first_summary) = clean_pageviews(&rows);
        let (second, second_summary) = clean_pageviews(&rows);

        assert_eq!(first, second);
        assert_eq!(first_summary, second_summary);
    }

    #[test]
    fn test_reapplying_own_bounds_is_a_noop() {
        let values: Vec<f64> = (0..100).map(|i| ((i * 13) % 251) as f64).collect();
        let rows = daily_rows(&values);

        let (clean, summary) = clean_pageviews(&rows);
        let bounds = CleanBounds {
            lower: summary.lower_bound,
            upper: summary.upper_bound,
        };

        let survivors: Vec<&PageView> =
            clean.iter().filter(|r| bounds.contains(r.value)).collect();
        assert_eq!(survivors.len(), clean.len());
    }

    #[test]
    fn test_bounds_are_reproducible() {
        let rows = daily_rows(&[12.0, 7.0, 3.0, 9.0, 15.0, 1.0, 8.0]);
        assert_eq!(clean_bounds(&rows), clean_bounds(&rows));
    }
}
