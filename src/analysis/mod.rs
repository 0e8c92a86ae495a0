/// Statistical analysis for the page-view chart generator.
///
/// Submodules:
/// - `quantile` — percentile computation with linear interpolation.
/// - `outliers` — quantile-band filtering of the raw table.
/// - `groupings` — organizes the cleaned table into per-year and per-month
///   structures for the bar and box charts.

pub mod groupings;
pub mod outliers;
pub mod quantile;
