//! SVG rendering of the report pages.
//!
//! A report is five pages written next to each other:
//! `<base>-1-summary.svg` through `<base>-5-cut-directions.svg`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{info, warn};

use crate::chart::{CutDirection, LAYER_COUNT, LINE_COUNT, NoteFilter};
use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::song::NoteSource;
use crate::stats::{CutDistribution, DensityGrid, Histogram, Summary, time_series};

/// Page names, in report order
pub const REPORT_PAGES: [&str; 5] = [
    "summary",
    "normal-heatmap",
    "bomb-heatmap",
    "timing",
    "cut-directions",
];

const FONT: &str = "sans-serif";

// Darkest shades of the YlGn and Reds color maps
const NORMAL_HEATMAP_COLOR: RGBColor = RGBColor(0, 104, 55);
const BOMB_HEATMAP_COLOR: RGBColor = RGBColor(165, 15, 21);

// Radial layout of the cut direction page, in page fractions
const RADIAL_SHIFT: f64 = 0.3;
const LABEL_SCALE: f64 = 0.7;

/// Path of page `index` (0-based) for a report written at `base`
pub fn page_path(base: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!("-{}-{}.svg", index + 1, REPORT_PAGES[index]));
    PathBuf::from(name)
}

/// Render every report page for `source` and return the written paths.
///
/// A page whose metric cannot be computed shows a notice instead; only
/// backend failures (e.g. an unwritable directory) are returned as errors.
pub fn write_report<S: NoteSource + ?Sized>(
    source: &S,
    config: &ReportConfig,
    base: &Path,
) -> Result<Vec<PathBuf>> {
    let normal = source.notes(NoteFilter::Normal);
    let bombs = source.notes(NoteFilter::Bomb);
    let all = source.notes(NoteFilter::All);
    let paths: Vec<PathBuf> = (0..REPORT_PAGES.len())
        .map(|i| page_path(base, i))
        .collect();

    draw_page(&paths[0], config, |page| summary_page(page, source))?;
    draw_page(&paths[1], config, |page| {
        let grid = DensityGrid::from_notes(&normal);
        heatmap_page(
            page,
            &grid,
            NORMAL_HEATMAP_COLOR,
            &heatmap_caption("normal notes", &grid),
        )
    })?;
    draw_page(&paths[2], config, |page| {
        let grid = DensityGrid::from_notes(&bombs);
        heatmap_page(page, &grid, BOMB_HEATMAP_COLOR, &heatmap_caption("bombs", &grid))
    })?;
    draw_page(&paths[3], config, |page| {
        match Histogram::from_series(&time_series(&all), config.histogram_bins) {
            Ok(histogram) => timing_page(page, &histogram),
            Err(e) => unavailable_page(page, "Notes over time", &e),
        }
    })?;
    draw_page(&paths[4], config, |page| {
        match CutDistribution::from_notes(&normal) {
            Ok(distribution) => cut_direction_page(page, &distribution),
            Err(e) => unavailable_page(page, "Percentage of cut directions", &e),
        }
    })?;

    info!("Wrote report {} ({} pages)", base.display(), paths.len());
    Ok(paths)
}

fn draw_page<F>(path: &Path, config: &ReportConfig, draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<()>,
{
    let root = SVGBackend::new(path, config.page_size).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()?;
    Ok(())
}

fn centered() -> Pos {
    Pos::new(HPos::Center, VPos::Center)
}

fn summary_page<DB, S>(page: &DrawingArea<DB, Shift>, source: &S) -> Result<()>
where
    DB: DrawingBackend,
    S: NoteSource + ?Sized,
{
    let mut lines = Vec::new();
    if source.song_count() > 1 {
        lines.push(format!("songs: {}", source.song_count()));
    }
    match Summary::compute(source) {
        Ok(summary) => lines.extend(summary.to_text().lines().map(str::to_owned)),
        Err(e) => {
            warn!("Summary unavailable: {}", e);
            lines.push(format!("Summary unavailable: {}", e));
        }
    }

    let style = (FONT, 22).into_font().color(&BLACK);
    for (i, line) in lines.into_iter().enumerate() {
        page.draw(&Text::new(line, (40, 50 + i as i32 * 32), style.clone()))?;
    }
    Ok(())
}

fn unavailable_page<DB: DrawingBackend>(
    page: &DrawingArea<DB, Shift>,
    title: &str,
    error: &Error,
) -> Result<()> {
    warn!("{} unavailable: {}", title, error);
    let (w, h) = page.dim_in_pixel();
    let (x, y) = (w as i32 / 2, h as i32 / 2);

    let title_style = (FONT, 28).into_font().color(&BLACK).pos(centered());
    let message_style = (FONT, 18).into_font().color(&BLACK).pos(centered());
    page.draw(&Text::new(title.to_string(), (x, y - 20), title_style))?;
    page.draw(&Text::new(error.to_string(), (x, y + 20), message_style))?;
    Ok(())
}

/// Interpolate from white (t = 0) to `color` (t = 1)
fn shade(color: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let mix = |c: u8| (255.0 - (255.0 - c as f64) * t).round() as u8;
    RGBColor(mix(color.0), mix(color.1), mix(color.2))
}

/// Heatmap caption; notes placed outside the grid are reported separately.
fn heatmap_caption(what: &str, grid: &DensityGrid) -> String {
    match grid.dropped() {
        0 => format!("Total {}: {}", what, grid.total()),
        dropped => format!(
            "Total {}: {} ({} outside the grid)",
            what,
            grid.total(),
            dropped
        ),
    }
}

fn heatmap_page<DB: DrawingBackend>(
    page: &DrawingArea<DB, Shift>,
    grid: &DensityGrid,
    color: RGBColor,
    caption: &str,
) -> Result<()> {
    let mut chart = ChartBuilder::on(page)
        .caption(caption, (FONT, 24))
        .margin(30)
        .build_cartesian_2d(0f64..LINE_COUNT as f64, 0f64..LAYER_COUNT as f64)?;

    let max = grid.max();
    for layer in 0..LAYER_COUNT {
        for index in 0..LINE_COUNT {
            let value = grid.get(index, layer).unwrap_or(0.0);
            let t = if max > 0.0 { value / max } else { 0.0 };
            let (x, y) = (index as f64, layer as f64);
            let text_color = if t > 0.5 { &WHITE } else { &BLACK };

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x + 0.03, y + 0.03), (x + 0.97, y + 0.97)],
                shade(color, t).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.2}", value),
                (x + 0.5, y + 0.5),
                (FONT, 22).into_font().color(text_color).pos(centered()),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("I{} L{}", index, layer),
                (x + 0.5, y + 0.2),
                (FONT, 13).into_font().color(text_color).pos(centered()),
            )))?;
        }
    }
    Ok(())
}

fn timing_page<DB: DrawingBackend>(
    page: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
) -> Result<()> {
    let y_max = (histogram.max_count() + 1) as f64;
    let mut chart = ChartBuilder::on(page)
        .caption("Notes over time", (FONT, 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(histogram.start..histogram.end(), 0f64..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Time (beats)")
        .y_desc("Number of notes")
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;
    chart.draw_series(histogram.buckets().map(|(low, high, count)| {
        Rectangle::new([(low, 0.0), (high, count as f64)], BLUE.mix(0.65).filled())
    }))?;
    Ok(())
}

fn radial_offset(direction: CutDirection) -> (f64, f64) {
    let s = RADIAL_SHIFT;
    match direction {
        CutDirection::Up => (0.0, -s),
        CutDirection::Down => (0.0, s),
        CutDirection::Left => (s, 0.0),
        CutDirection::Right => (-s, 0.0),
        CutDirection::UpLeft => (s, -s),
        CutDirection::UpRight => (-s, -s),
        CutDirection::DownLeft => (s, s),
        CutDirection::DownRight => (-s, s),
        CutDirection::Any | CutDirection::Unknown(_) => (0.0, 0.0),
    }
}

fn cut_direction_page<DB: DrawingBackend>(
    page: &DrawingArea<DB, Shift>,
    distribution: &CutDistribution,
) -> Result<()> {
    let (w, h) = page.dim_in_pixel();
    // page fractions, y pointing up
    let at = |fx: f64, fy: f64| ((w as f64 * fx) as i32, (h as f64 * (1.0 - fy)) as i32);

    page.draw(&Text::new(
        "Percentage of cut directions",
        at(0.05, 0.9),
        (FONT, 28).into_font().color(&BLACK),
    ))?;
    page.draw(&Text::new(
        "eg. N means you have to cut the block from the top",
        at(0.05, 0.05),
        (FONT, 12).into_font().color(&BLACK),
    ))?;

    let value_style = (FONT, 26).into_font().color(&BLACK).pos(centered());
    let label_style = (FONT, 20).into_font().color(&BLUE).pos(centered());
    for (direction, fraction) in distribution.iter() {
        let (dx, dy) = radial_offset(direction);
        page.draw(&Text::new(
            format!("{:.2}", fraction),
            at(0.5 + dx, 0.5 + dy),
            value_style.clone(),
        ))?;
        if direction != CutDirection::Any {
            page.draw(&Text::new(
                direction.label(),
                at(0.5 + dx * LABEL_SCALE, 0.5 + dy * LABEL_SCALE),
                label_style.clone(),
            ))?;
        }
    }
    Ok(())
}
