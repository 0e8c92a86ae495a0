/// Calendar groupings over the cleaned table.
///
/// The bar and box charts never see raw rows; they see these derived
/// aggregates, rebuilt inside each plot routine on every run:
/// - monthly-mean pivot — mean value per (year, month), rows = years,
///   columns = months;
/// - year groups — value distribution per year, chronological;
/// - month groups — value distribution per calendar month, January first
///   regardless of input order.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::model::PageView;

// ---------------------------------------------------------------------------
// Monthly-mean pivot
// ---------------------------------------------------------------------------

/// Mean value per (year, month), pivoted: one row per year (ascending),
/// one column per month (January = index 0). A cell is `None` when the
/// table has no rows for that (year, month).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMeanPivot {
    pub years: Vec<i32>,
    pub means: Vec<[Option<f64>; 12]>,
}

impl MonthlyMeanPivot {
    /// Largest mean in the pivot, for chart scaling. Zero when empty.
    pub fn max_mean(&self) -> f64 {
        self.means
            .iter()
            .flatten()
            .flatten()
            .fold(0.0f64, |acc, &m| acc.max(m))
    }
}

/// Group rows by (calendar year, calendar month) and average each group.
pub fn monthly_mean_pivot(rows: &[PageView]) -> MonthlyMeanPivot {
    // (year, month0) -> (sum, count); BTreeMap keeps years ascending.
    let mut cells: BTreeMap<(i32, usize), (f64, usize)> = BTreeMap::new();

    for row in rows {
        let key = (row.date.year(), row.date.month0() as usize);
        let cell = cells.entry(key).or_insert((0.0, 0));
        cell.0 += row.value;
        cell.1 += 1;
    }

    let mut years: Vec<i32> = cells.keys().map(|&(year, _)| year).collect();
    years.dedup();

    let mut means = vec![[None; 12]; years.len()];
    for (&(year, month0), &(sum, count)) in &cells {
        let row_idx = years.iter().position(|&y| y == year).unwrap();
        means[row_idx][month0] = Some(sum / count as f64);
    }

    MonthlyMeanPivot { years, means }
}

// ---------------------------------------------------------------------------
// Distribution groupings
// ---------------------------------------------------------------------------

/// Values grouped by year, chronological.
pub fn group_by_year(rows: &[PageView]) -> Vec<(i32, Vec<f64>)> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.date.year()).or_default().push(row.value);
    }
    groups.into_iter().collect()
}

/// Values grouped by calendar month. Index 0 is January, index 11 is
/// December — the ordering is structural, not derived from the input.
pub fn group_by_month(rows: &[PageView]) -> [Vec<f64>; 12] {
    let mut groups: [Vec<f64>; 12] = Default::default();
    for row in rows {
        groups[row.date.month0() as usize].push(row.value);
    }
    groups
}
