//! Pipeline Scenario Tests
//!
//! End-to-end runs of the load → clean → render pipeline against synthetic
//! datasets in scratch directories. Rendering goes all the way to PNG bytes
//! on disk, so these tests also confirm the chart backend works in this
//! environment.

use std::fs;
use std::path::Path;

use pageview_charts::dataset::{BAR_PLOT_FILE, BOX_PLOT_FILE, FCC_FORUM_PAGEVIEWS, LINE_PLOT_FILE};
use pageview_charts::pipeline::{self, RunStatus};

/// Write a deterministic two-year daily dataset with a handful of extreme
/// spikes, starting 2017-01-01.
fn write_synthetic_csv(dir: &Path) -> usize {
    let start = chrono::NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    let days = 730;

    let mut text = String::from("date,value\n");
    for i in 0..days {
        let date = start + chrono::Days::new(i);
        // A seasonal wave with a few days three orders of magnitude higher.
        let value = if i % 181 == 90 {
            1_500_000
        } else {
            1_000 + (i % 30) * 25 + (i % 7) * 40
        };
        text.push_str(&format!("{},{}\n", date.format("%Y-%m-%d"), value));
    }

    fs::write(dir.join(FCC_FORUM_PAGEVIEWS.filename), text).unwrap();
    days as usize
}

fn artifact_paths(dir: &Path) -> [std::path::PathBuf; 3] {
    [
        dir.join(LINE_PLOT_FILE),
        dir.join(BAR_PLOT_FILE),
        dir.join(BOX_PLOT_FILE),
    ]
}

#[test]
fn test_missing_csv_skips_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();

    let summary = pipeline::run_in(dir.path()).unwrap();

    assert_eq!(summary.status, RunStatus::SkippedMissingInput);
    assert!(summary.cleaning.is_none());
    assert!(summary.artifacts.is_empty());
    for path in artifact_paths(dir.path()) {
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}

#[test]
fn test_full_pipeline_writes_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let rows_written = write_synthetic_csv(dir.path());

    println!("\n═══════════════════════════════════════════════════════════");
    println!("Full pipeline run in {}", dir.path().display());
    println!("═══════════════════════════════════════════════════════════");

    let summary = pipeline::run_in(dir.path()).unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.artifacts.len(), 3);

    let cleaning = summary.cleaning.as_ref().unwrap();
    assert_eq!(cleaning.rows_in, rows_written);
    assert!(cleaning.rows_retained <= cleaning.rows_in);
    // The spike days sit far above the 97.5th percentile.
    assert!(cleaning.rows_removed >= 1);

    for path in artifact_paths(dir.path()) {
        let meta = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("{} was not written", path.display()));
        assert!(meta.len() > 0, "{} is empty", path.display());
    }

    // Persist the run summary the way unattended runs would consume it.
    let report_json = serde_json::to_string_pretty(&summary).unwrap();
    let report_path = dir.path().join("run_summary.json");
    fs::write(&report_path, &report_json).unwrap();
    assert!(fs::metadata(&report_path).unwrap().len() > 0);

    println!("Summary: {}/{} rows retained", cleaning.rows_retained, cleaning.rows_in);
    println!("═══════════════════════════════════════════════════════════\n");
}

#[test]
fn test_rerun_overwrites_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_synthetic_csv(dir.path());

    let first = pipeline::run_in(dir.path()).unwrap();
    let second = pipeline::run_in(dir.path()).unwrap();

    assert_eq!(first.status, RunStatus::Completed);
    assert_eq!(second.status, RunStatus::Completed);
    // Cleaning is deterministic, so both runs report identical counts.
    assert_eq!(
        first.cleaning.as_ref().unwrap().rows_retained,
        second.cleaning.as_ref().unwrap().rows_retained
    );
}

#[test]
fn test_malformed_csv_aborts_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(FCC_FORUM_PAGEVIEWS.filename),
        "date,value\n2017-01-01,not-a-number\n",
    )
    .unwrap();

    let result = pipeline::run_in(dir.path());

    assert!(result.is_err());
    for path in artifact_paths(dir.path()) {
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
