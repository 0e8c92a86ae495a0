/// Chart rendering for the page-view chart generator.
///
/// Each routine borrows the cleaned table, derives whatever grouping it
/// needs internally, and writes exactly one fixed-named PNG, overwriting
/// any prior file. All three charts share the bitmap backend and the
/// y-axis label from the dataset registry.
///
/// Submodules:
/// - `line` — daily values over time.
/// - `bar` — monthly means clustered by year.
/// - `boxplot` — year-wise and month-wise distributions, side by side.

pub mod bar;
pub mod boxplot;
pub mod line;

/// Fixed brick-red color for the daily line series.
pub(crate) const SERIES_RED: plotters::style::RGBColor = plotters::style::RGBColor(214, 39, 40);
