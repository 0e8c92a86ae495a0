//! Dataset Download Integration Test
//!
//! Hits the live dataset URL, so it is ignored by default. Run it with
//! `cargo test -- --ignored` from a machine with network access before
//! trusting a fresh environment.

use pageview_charts::dataset::FCC_FORUM_PAGEVIEWS;
use pageview_charts::ingest::download;

#[test]
#[ignore = "requires network access to the dataset host"]
fn test_download_writes_nonempty_file() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join(FCC_FORUM_PAGEVIEWS.filename);

    let client = reqwest::blocking::Client::new();
    let size = download::fetch_dataset(&client, &FCC_FORUM_PAGEVIEWS, &dest).unwrap();

    println!("Downloaded {} bytes to {}", size, dest.display());

    assert!(dest.exists());
    assert!(size > 0);
    assert_eq!(std::fs::metadata(&dest).unwrap().len(), size);
}
