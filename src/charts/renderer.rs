//! Chart Renderer
//! Clears the figure and redraws it from a [`PlotRequest`].

use super::{Annotation, Figure, Trace};
use crate::data::PlotRequest;
use thiserror::Error;
use tracing::debug;

/// Horizontal position of series annotations, as a fraction of the X range.
pub const ANNOTATION_X_FRACTION: f64 = 0.1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Nothing to plot: the X series is empty")]
    NoData,
    #[error("{annotations} annotation labels for {series} Y series")]
    SeriesMismatch { series: usize, annotations: usize },
    #[error("Series {label:?} has {y_len} values but X has {x_len}")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Check a request against the constraints the drawing relies on.
    pub fn validate(request: &PlotRequest) -> Result<(), RenderError> {
        let x_len = request.x.values.len();
        if x_len == 0 {
            return Err(RenderError::NoData);
        }
        if request.annotations.len() > request.ys.len() {
            return Err(RenderError::SeriesMismatch {
                series: request.ys.len(),
                annotations: request.annotations.len(),
            });
        }
        if let Some((series, _)) = request.ys.iter().find(|(s, _)| s.values.len() != x_len) {
            return Err(RenderError::LengthMismatch {
                label: series.label.clone(),
                x_len,
                y_len: series.values.len(),
            });
        }
        Ok(())
    }

    /// Redraw `figure` from `request`. On error the figure is left as it was.
    pub fn render(figure: &mut Figure, request: &PlotRequest) -> Result<(), RenderError> {
        Self::validate(request)?;

        let xs = &request.x.values;
        let (x_min, x_max) = xs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let annotation_x = x_min + ANNOTATION_X_FRACTION * (x_max - x_min);

        figure.clear();
        let axes = figure.add_axes(&request.x_label, &request.y_label);

        for (series, marker) in &request.ys {
            axes.traces.push(Trace {
                label: series.label.clone(),
                points: xs
                    .iter()
                    .zip(&series.values)
                    .map(|(&x, &y)| [x, y])
                    .collect(),
                marker: *marker,
            });
        }

        // Validation guarantees one series per annotation, each non-empty.
        for (text, (series, _)) in request.annotations.iter().zip(&request.ys) {
            axes.annotations.push(Annotation {
                text: text.clone(),
                x: annotation_x,
                y: series.values[0],
            });
        }

        debug!(
            traces = axes.traces.len(),
            annotations = axes.annotations.len(),
            "figure redrawn"
        );
        Ok(())
    }
}
