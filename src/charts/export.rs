//! PNG export of the current figure using the plotters bitmap backend.

use super::plotter::PALETTE_RGB;
use super::Figure;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No chart to export")]
    EmptyFigure,
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Drawing(err.to_string())
}

/// Pad a range so a single value still spans a visible interval.
fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Write `figure` to `path` as a `width` x `height` PNG.
pub fn export_png(
    figure: &Figure,
    path: &Path,
    (width, height): (u32, u32),
) -> Result<(), ExportError> {
    let axes = figure.axes().ok_or(ExportError::EmptyFigure)?;
    let (min, max) = axes.data_bounds().ok_or(ExportError::EmptyFigure)?;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(padded(min[0], max[0]), padded(min[1], max[1]))
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc(axes.x_label.as_str())
        .y_desc(axes.y_label.as_str())
        .draw()
        .map_err(drawing)?;

    for (idx, trace) in axes.traces.iter().enumerate() {
        let (r, g, b) = PALETTE_RGB[idx % PALETTE_RGB.len()];
        let color = RGBColor(r, g, b);
        let points = trace.points.iter().map(|p| (p[0], p[1]));

        if trace.marker.draws_line() {
            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(drawing)?
                .label(trace.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        if trace.marker.draws_points() {
            let series = chart
                .draw_series(PointSeries::of_element(
                    points,
                    4,
                    color,
                    &|c, s, st| EmptyElement::at(c) + Circle::new((0, 0), s, st.filled()),
                ))
                .map_err(drawing)?;
            if !trace.marker.draws_line() {
                series
                    .label(trace.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
            }
        }
    }

    chart
        .draw_series(axes.annotations.iter().map(|a| {
            Text::new(a.text.clone(), (a.x, a.y), ("sans-serif", 16).into_font())
        }))
        .map_err(drawing)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    info!(path = %path.display(), width, height, "exported chart");
    Ok(())
}
