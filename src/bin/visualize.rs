//! Pipeline entry point.
//!
//! Verifies the dataset CSV exists, then runs load → clean → line → bar →
//! box. A missing input file prints guidance and exits normally; any other
//! failure propagates and terminates the process abnormally, leaving
//! already-written artifacts in place.

use std::error::Error;

use pageview_charts::logging::{self, LogLevel};
use pageview_charts::pipeline;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logger(LogLevel::Info, None, false);

    pipeline::run()?;
    Ok(())
}
