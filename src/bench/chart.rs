/// PNG rendering of a `MetricTable` as a grid of line charts.
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::errors::BenchError;
use super::grid::GridLayout;
use super::series::{MetricSeries, MetricTable};

/// Pixel size of one grid cell.
const CELL_SIZE: (u32, u32) = (1000, 500);

const TITLE_FONT_SIZE: u32 = 32;
const CAPTION_FONT_SIZE: u32 = 22;

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const LINE_WIDTH: u32 = 3;
const MARKER_RADIUS: i32 = 7;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Destination for rendered figures.
///
/// The pipeline only talks to this trait so the save step can be swapped
/// out in tests.
pub trait FigureWriter {
    /// Render `table` under `title` and write it to `out`.
    ///
    /// # Errors
    ///
    /// `BenchError::Render` when drawing fails, `BenchError::Write` when the
    /// image cannot be saved.
    fn write_figure(
        &mut self,
        title: &str,
        table: &MetricTable,
        out: &Path,
    ) -> Result<(), BenchError>;
}

/// Writes figures as PNG files through the plotters bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngWriter;

impl FigureWriter for PngWriter {
    fn write_figure(
        &mut self,
        title: &str,
        table: &MetricTable,
        out: &Path,
    ) -> Result<(), BenchError> {
        render_png(title, table, out)
    }
}

/// Output image path: the input path with its extension replaced by `.png`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Canvas size in pixels for a grid.
///
/// # Errors
///
/// Fails if the grid is too large to address in `u32` pixels.
pub fn canvas_size(grid: &GridLayout) -> Result<(u32, u32)> {
    let cols = u32::try_from(grid.cols()).context("grid column count overflow")?;
    let rows = u32::try_from(grid.rows()).context("grid row count overflow")?;
    let width = CELL_SIZE.0.checked_mul(cols).context("canvas too wide")?;
    let height = CELL_SIZE.1.checked_mul(rows).context("canvas too tall")?;
    Ok((width, height))
}

/// Render and save one figure. The backend lives only for this call.
///
/// # Errors
///
/// `BenchError::Render` if laying out or drawing fails, `BenchError::Write`
/// if the PNG cannot be written to `out`.
pub fn render_png(title: &str, table: &MetricTable, out: &Path) -> Result<(), BenchError> {
    let grid = GridLayout::new(table.series.len());
    let size = canvas_size(&grid).map_err(|e| BenchError::Render {
        reason: format!("{e:#}"),
    })?;

    let root = BitMapBackend::new(out, size).into_drawing_area();
    draw_figure(&root, title, table, &grid).map_err(|e| BenchError::Render {
        reason: format!("{e:#}"),
    })?;
    root.present().map_err(|e| BenchError::Write {
        path: out.to_owned(),
        reason: e.to_string(),
    })
}

fn draw_figure(
    root: &Area<'_>,
    title: &str,
    table: &MetricTable,
    grid: &GridLayout,
) -> Result<()> {
    root.fill(&WHITE)?;
    let body = root.titled(title, ("sans-serif", TITLE_FONT_SIZE).into_font())?;
    let cells = body.split_evenly((grid.rows(), grid.cols()));

    let x_range = x_range(table);
    for (i, series) in table.series.iter().enumerate() {
        draw_metric(&cells[grid.cell(i)], series, &table.index_name, x_range.clone())
            .with_context(|| format!("chart '{}'", series.name))?;
    }
    // The hidden cell stays blank: nothing is drawn into it.
    debug_assert_eq!(
        cells.len() - usize::from(grid.hidden_cell().is_some()),
        table.series.len()
    );
    Ok(())
}

fn draw_metric(
    area: &Area<'_>,
    series: &MetricSeries,
    index_name: &str,
    x_range: Range<i64>,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{}, for {index_name}", series.name),
            ("sans-serif", CAPTION_FONT_SIZE),
        )
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range(series))?;

    // Integer x coordinates: tick labels are whole block sizes only.
    chart.configure_mesh().draw()?;

    // One line per run of present values; missing values leave a gap.
    for run in series.segments() {
        chart.draw_series(LineSeries::new(run, LINE_COLOR.stroke_width(LINE_WIDTH)))?;
    }

    if let Some(min) = series.minimum() {
        chart.draw_series(std::iter::once(Circle::new(
            min,
            MARKER_RADIUS,
            RED.filled(),
        )))?;
    }

    Ok(())
}

/// Shared x range for every chart; widened when the index is a single value.
fn x_range(table: &MetricTable) -> Range<i64> {
    match table.index_bounds() {
        Some((lo, hi)) if lo < hi => lo..hi,
        Some((x, _)) => x.saturating_sub(1)..x.saturating_add(1),
        None => 0..1,
    }
}

/// Value range with a 5% margin so the line and marker stay off the frame.
///
/// Falls back to `0..1` when the padded span does not fit in an `f64`;
/// plotters cannot lay out ticks over an infinite range.
fn y_range(series: &MetricSeries) -> Range<f64> {
    const FALLBACK: Range<f64> = 0.0..1.0;
    let Some((lo, hi)) = series.value_bounds() else {
        return FALLBACK;
    };
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else if lo.abs() < f64::EPSILON {
        1.0
    } else {
        lo.abs() * 0.05
    };
    let (start, end) = (lo - pad, hi + pad);
    if (end - start).is_finite() {
        start..end
    } else {
        FALLBACK
    }
}
