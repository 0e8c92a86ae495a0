/// Data acquisition for the page-view chart generator.
///
/// Submodules:
/// - `download` — HTTP retrieval of the source CSV to the local cache file.
/// - `csv` — parsing the cached CSV into the in-memory table.

pub mod csv;
pub mod download;
