/// Bar chart: average page views per month, clustered by year.
///
/// Each year gets a cluster of up to twelve bars, one per calendar month
/// that has data. Year labels run along the x-axis rotated 90°; the legend
/// maps bar colors to full month names under a "Months" heading.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::analysis::groupings;
use crate::dataset::{FCC_FORUM_PAGEVIEWS, MONTH_NAMES};
use crate::model::PageView;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Total width of one year cluster, in axis units. Clusters are centered
/// on integer positions, so 0.8 leaves a 0.2 gap between years.
const CLUSTER_WIDTH: f64 = 0.8;

/// Render the grouped bar chart for `rows` into the PNG at `path`.
pub fn draw_bar_plot(rows: &[PageView], path: &Path) -> Result<(), Box<dyn Error>> {
    let pivot = groupings::monthly_mean_pivot(rows);
    if pivot.years.is_empty() {
        return Err("no rows to plot".into());
    }

    let n_years = pivot.years.len();
    let y_max = match pivot.max_mean() {
        max if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n_years as f64 - 0.5), 0f64..y_max)?;

    let years = pivot.years.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n_years)
        .x_label_formatter(&move |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.01 && idx >= 0.0 && (idx as usize) < years.len() {
                years[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Years")
        .y_desc(format!("Average {}", FCC_FORUM_PAGEVIEWS.value_label))
        .draw()?;

    // Legend heading; the series itself is empty.
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label("Months")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x, y)], &WHITE));

    let bar_width = CLUSTER_WIDTH / 12.0;
    for month0 in 0..12 {
        let color = Palette99::pick(month0).to_rgba();

        let bars: Vec<Rectangle<(f64, f64)>> = pivot
            .years
            .iter()
            .enumerate()
            .filter_map(|(year_idx, _)| {
                pivot.means[year_idx][month0].map(|mean| {
                    let x0 = year_idx as f64 - CLUSTER_WIDTH / 2.0 + month0 as f64 * bar_width;
                    Rectangle::new([(x0, 0.0), (x0 + bar_width, mean)], color.filled())
                })
            })
            .collect();

        chart
            .draw_series(bars)?
            .label(MONTH_NAMES[month0])
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
