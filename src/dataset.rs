/// Dataset registry for the page-view chart generator.
///
/// Defines the one dataset this tool renders, along with every fixed file
/// name and chart caption. This is the single source of truth for fixed
/// names — all other modules should reference them from here rather than
/// hardcoding strings.

// ---------------------------------------------------------------------------
// CSV column names (re-exported here for use in header validation)
// ---------------------------------------------------------------------------

pub use crate::model::{COL_DATE, COL_VALUE};

// ---------------------------------------------------------------------------
// Dataset metadata
// ---------------------------------------------------------------------------

/// Metadata for a downloadable daily time-series dataset.
pub struct Dataset {
    /// Short human-readable name, used in log lines.
    pub name: &'static str,
    /// Source URL for the CSV resource.
    pub url: &'static str,
    /// Fixed local filename the fetcher writes and the loader reads.
    pub filename: &'static str,
    /// Title of the line chart.
    pub line_title: &'static str,
    /// Y-axis label shared by all three charts.
    pub value_label: &'static str,
}

/// The freeCodeCamp forum page-views dataset: one row per calendar day,
/// columns `date` (ISO date) and `value` (page-view count).
///
/// Sources:
///   - Data: freeCodeCamp page-view time-series boilerplate repository
pub static FCC_FORUM_PAGEVIEWS: Dataset = Dataset {
    name: "fcc-forum-pageviews",
    url: "https://raw.githubusercontent.com/freeCodeCamp/boilerplate-page-view-time-series-visualizer/master/fcc-forum-pageviews.csv",
    filename: "fcc-forum-pageviews.csv",
    line_title: "Daily freeCodeCamp Forum Page Views 5/2016-12/2019",
    value_label: "Page Views",
};

// ---------------------------------------------------------------------------
// Artifact names
// ---------------------------------------------------------------------------

/// Output file for the line chart. Overwritten on every run.
pub const LINE_PLOT_FILE: &str = "line_plot.png";

/// Output file for the monthly-mean bar chart. Overwritten on every run.
pub const BAR_PLOT_FILE: &str = "bar_plot.png";

/// Output file for the year/month box charts. Overwritten on every run.
pub const BOX_PLOT_FILE: &str = "box_plot.png";

// ---------------------------------------------------------------------------
// Month name tables
// ---------------------------------------------------------------------------

/// Full month names, January first, for the bar chart legend.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter month abbreviations, January first, for the box chart axis.
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_tables_align() {
        for (full, abbrev) in MONTH_NAMES.iter().zip(MONTH_ABBREV.iter()) {
            assert!(
                full.starts_with(abbrev),
                "{} is not an abbreviation of {}",
                abbrev,
                full
            );
        }
    }

    #[test]
    fn test_artifact_names_are_png() {
        for name in [LINE_PLOT_FILE, BAR_PLOT_FILE, BOX_PLOT_FILE] {
            assert!(name.ends_with(".png"));
        }
    }

    #[test]
    fn test_dataset_url_serves_the_local_filename() {
        assert!(FCC_FORUM_PAGEVIEWS.url.starts_with("https://"));
        assert!(FCC_FORUM_PAGEVIEWS.url.ends_with(FCC_FORUM_PAGEVIEWS.filename));
    }
}
