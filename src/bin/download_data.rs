//! Fetcher entry point.
//!
//! Downloads the page-view dataset to its fixed local filename and reports
//! the resulting byte size. Any failure is reported on the console and the
//! process still exits normally — this stage is tolerant by design, since
//! the pipeline stage re-checks for the file before doing any work.

use std::path::Path;

use pageview_charts::dataset::FCC_FORUM_PAGEVIEWS;
use pageview_charts::ingest::download;
use pageview_charts::logging::{self, LogLevel};

fn main() {
    logging::init_logger(LogLevel::Info, None, false);

    let dataset = &FCC_FORUM_PAGEVIEWS;
    println!("Downloading data from {}...", dataset.url);

    let client = reqwest::blocking::Client::new();
    match download::fetch_dataset(&client, dataset, Path::new(dataset.filename)) {
        Ok(size) => {
            println!("✓ Saved '{}' ({} bytes)", dataset.filename, size);
        }
        Err(e) => {
            logging::log_fetch_failure(dataset.name, "download", e.as_ref());
            println!("The dataset was not saved. Try again once the source is reachable.");
        }
    }
}
