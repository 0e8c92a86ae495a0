//! Page-view chart generator.
//!
//! Downloads the freeCodeCamp forum page-view dataset, removes quantile
//! outliers, and renders three report images summarizing trends and
//! seasonality. Two argument-less binaries drive the library:
//! `download_data` fetches the CSV to its fixed local filename, and
//! `visualize` runs the load → clean → plot pipeline against it. The file
//! on disk is the only interface between the two stages.

pub mod analysis;
pub mod dataset;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod render;
