//! Chart Plotter Module
//! Paints a [`Figure`] interactively using egui_plot.

use super::{Figure, Marker};
use egui::{Align2, Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

/// Series colors as RGB triples, shared with the PNG export.
pub const PALETTE_RGB: [(u8, u8, u8); 8] = [
    (52, 152, 219), // Blue
    (231, 76, 60),  // Red
    (46, 204, 113), // Green
    (155, 89, 182), // Purple
    (243, 156, 18), // Orange
    (26, 188, 156), // Teal
    (233, 30, 99),  // Pink
    (96, 125, 139), // Blue Grey
];

pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the trace at `index`.
    pub fn series_color(index: usize) -> Color32 {
        let (r, g, b) = PALETTE_RGB[index % PALETTE_RGB.len()];
        Color32::from_rgb(r, g, b)
    }

    /// Draw the figure. `reset` drops the remembered zoom and pan, fitting
    /// the view to the new data.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure, reset: bool) {
        let Some(axes) = figure.axes() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No chart").size(20.0).color(Color32::GRAY));
            });
            return;
        };

        let mut plot = Plot::new("chart")
            .x_axis_label(axes.x_label.as_str())
            .y_axis_label(axes.y_label.as_str())
            .legend(Legend::default())
            .allow_scroll(false);
        if reset {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            for (i, trace) in axes.traces.iter().enumerate() {
                let color = Self::series_color(i);

                if trace.marker.draws_line() {
                    plot_ui.line(
                        Line::new(PlotPoints::new(trace.points.clone()))
                            .color(color)
                            .width(2.0)
                            .name(&trace.label),
                    );
                }
                if trace.marker.draws_points() {
                    plot_ui.points(
                        Points::new(PlotPoints::new(trace.points.clone()))
                            .radius(4.0)
                            .color(color)
                            .name(&trace.label),
                    );
                }
            }

            for annotation in &axes.annotations {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(annotation.x, annotation.y),
                        RichText::new(&annotation.text).size(14.0),
                    )
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }
        });
    }

    /// Label, draw style and color of every trace, in drawing order.
    pub fn describe(figure: &Figure) -> Vec<(String, Marker, Color32)> {
        figure
            .axes()
            .map(|axes| {
                axes.traces
                    .iter()
                    .enumerate()
                    .map(|(i, t)| (t.label.clone(), t.marker, Self::series_color(i)))
                    .collect()
            })
            .unwrap_or_default()
    }
}
