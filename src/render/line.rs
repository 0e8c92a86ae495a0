/// Line chart: daily page views over the full retained date range.
///
/// One point per retained date, joined by a single fixed-color series.
/// Dates removed by cleaning simply leave a longer segment between their
/// neighbors — no resampling, no gap interpolation.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::dataset::FCC_FORUM_PAGEVIEWS;
use crate::model::PageView;
use crate::render::SERIES_RED;

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 600;

/// Render the line chart for `rows` into the PNG at `path`.
pub fn draw_line_plot(rows: &[PageView], path: &Path) -> Result<(), Box<dyn Error>> {
    let first = rows.first().ok_or("no rows to plot")?.date;
    let last = rows.last().ok_or("no rows to plot")?.date;
    let y_max = rows.iter().map(|r| r.value).fold(0.0f64, f64::max);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(FCC_FORUM_PAGEVIEWS.line_title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(first..last, 0f64..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(FCC_FORUM_PAGEVIEWS.value_label)
        .x_labels(8)
        .y_labels(8)
        .draw()?;

    chart.draw_series(LineSeries::new(
        rows.iter().map(|r| (r.date, r.value)),
        &SERIES_RED,
    ))?;

    root.present()?;
    Ok(())
}
