/// Pipeline runner for the page-view chart generator.
///
/// Drives the report flow end to end: existence check, load, clean, then
/// the three chart routines in a fixed order (line, bar, box). The first
/// error from load, clean, or render aborts the remaining stages; artifacts
/// already written stay on disk. A missing input file is not an error — the
/// run is reported as skipped, with remediation guidance, and no artifact
/// is touched.

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::outliers::{self, CleaningSummary};
use crate::dataset::{
    BAR_PLOT_FILE, BOX_PLOT_FILE, FCC_FORUM_PAGEVIEWS, LINE_PLOT_FILE,
};
use crate::ingest::csv;
use crate::logging::{self, Stage};
use crate::render;

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunStatus {
    Completed,
    SkippedMissingInput,
}

/// What a pipeline run did: row counts, bounds, and artifacts written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub status: RunStatus,
    pub cleaning: Option<CleaningSummary>,
    pub artifacts: Vec<String>,
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

type RenderFn = fn(&[crate::model::PageView], &Path) -> Result<(), Box<dyn Error>>;

/// Run the full pipeline in the current directory.
pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    run_in(Path::new("."))
}

/// Run the full pipeline with `dir` as the working directory.
///
/// Taking the directory as a parameter keeps runs deterministic in tests;
/// the binary entry point passes the current directory.
pub fn run_in(dir: &Path) -> Result<RunSummary, Box<dyn Error>> {
    let dataset = &FCC_FORUM_PAGEVIEWS;
    let csv_path = dir.join(dataset.filename);

    if !csv_path.exists() {
        logging::error(Stage::Load, Some(dataset.filename), "input file not found");
        println!("'{}' not found.", dataset.filename);
        println!("Run the download_data binary first, or fetch the dataset from:");
        println!("  {}", dataset.url);
        return Ok(RunSummary {
            status: RunStatus::SkippedMissingInput,
            cleaning: None,
            artifacts: Vec::new(),
        });
    }

    println!("Loading {}...", dataset.filename);
    let raw = csv::load_pageviews(&csv_path)?;

    let (clean, cleaning) = outliers::clean_pageviews(&raw);
    logging::debug(
        Stage::Clean,
        Some(dataset.filename),
        &format!(
            "bounds [{:.1}, {:.1}]",
            cleaning.lower_bound, cleaning.upper_bound
        ),
    );
    println!(
        "{} rows loaded, {} retained after outlier removal",
        cleaning.rows_in, cleaning.rows_retained
    );

    let mut artifacts = Vec::new();
    let renders: [(&str, RenderFn); 3] = [
        (LINE_PLOT_FILE, render::line::draw_line_plot),
        (BAR_PLOT_FILE, render::bar::draw_bar_plot),
        (BOX_PLOT_FILE, render::boxplot::draw_box_plot),
    ];

    for (filename, draw) in renders {
        println!("Rendering {}...", filename);
        draw(&clean, &dir.join(filename))?;
        logging::debug(Stage::Render, Some(filename), "written");
        artifacts.push(filename.to_string());
    }

    println!(
        "✓ Generated {}, {}, {}",
        LINE_PLOT_FILE, BAR_PLOT_FILE, BOX_PLOT_FILE
    );

    Ok(RunSummary {
        status: RunStatus::Completed,
        cleaning: Some(cleaning),
        artifacts,
    })
}
