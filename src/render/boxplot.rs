/// Box charts: page-view distributions by year and by calendar month.
///
/// Two panels share one image. The left panel shows the spread per year in
/// chronological order; the right panel shows the spread per calendar month,
/// January through December, using three-letter abbreviations. Month order
/// is structural (index-based), never derived from input order.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analysis::groupings;
use crate::dataset::{FCC_FORUM_PAGEVIEWS, MONTH_ABBREV};
use crate::model::PageView;

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 600;

const YEAR_PANEL_TITLE: &str = "Year-wise Box Plot (Trend)";
const MONTH_PANEL_TITLE: &str = "Month-wise Box Plot (Seasonality)";

/// Render both box panels for `rows` into the PNG at `path`.
pub fn draw_box_plot(rows: &[PageView], path: &Path) -> Result<(), Box<dyn Error>> {
    if rows.is_empty() {
        return Err("no rows to plot".into());
    }

    // Per-year groups, chronological.
    let year_groups: Vec<(String, Quartiles)> = groupings::group_by_year(rows)
        .iter()
        .map(|(year, values)| (year.to_string(), Quartiles::new(values)))
        .collect();

    // Per-month groups, January first; months without data are skipped.
    let month_groups: Vec<(String, Quartiles)> = groupings::group_by_month(rows)
        .iter()
        .enumerate()
        .filter(|(_, values)| !values.is_empty())
        .map(|(month0, values)| (MONTH_ABBREV[month0].to_string(), Quartiles::new(values)))
        .collect();

    // Shared y-range across both panels, wide enough for every whisker.
    let mut y_min = f32::MAX;
    let mut y_max = f32::MIN;
    for (_, quartiles) in year_groups.iter().chain(month_groups.iter()) {
        for v in quartiles.values() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    let pad = match y_max - y_min {
        span if span > 0.0 => span * 0.05,
        _ => 1.0,
    };
    let y_range = (y_min - pad)..(y_max + pad);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally((WIDTH / 2) as i32);

    draw_panel(&left, YEAR_PANEL_TITLE, "Year", &year_groups, y_range.clone())?;
    draw_panel(&right, MONTH_PANEL_TITLE, "Month", &month_groups, y_range)?;

    root.present()?;
    Ok(())
}

/// Draw one labeled panel of vertical boxes onto `area`.
fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    x_desc: &str,
    groups: &[(String, Quartiles)],
    y_range: Range<f32>,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((0..groups.len()).into_segmented(), y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len())
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) if *i < groups.len() => groups[*i].0.clone(),
            _ => String::new(),
        })
        .x_desc(x_desc)
        .y_desc(FCC_FORUM_PAGEVIEWS.value_label)
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(i, (_, quartiles))| {
        Boxplot::new_vertical(SegmentValue::CenterOf(i), quartiles)
            .width(28)
            .whisker_width(0.5)
            .style(Palette99::pick(i).stroke_width(2))
    }))?;

    Ok(())
}
