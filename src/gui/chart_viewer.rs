//! Chart Viewer Widget
//! Shows the figure with a small legend of trace styles above it.

use crate::charts::{ChartPlotter, Figure, Marker};
use egui::RichText;

/// Remembers which figure revision is on screen, so the plot view is reset
/// once per redraw and user zoom survives ordinary repaints.
#[derive(Default)]
pub struct ChartViewer {
    shown_revision: Option<u64>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `revision` differs from the last one shown, recording it.
    fn take_reset(&mut self, revision: u64) -> bool {
        let changed = self.shown_revision != Some(revision);
        self.shown_revision = Some(revision);
        changed
    }

    pub fn show(&mut self, ui: &mut egui::Ui, figure: &Figure, revision: u64) {
        let legend = ChartPlotter::describe(figure);
        if !legend.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for (label, marker, color) in legend {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 3.0, color);
                    let style = match marker {
                        Marker::Line => "line",
                        Marker::Point => "points",
                        Marker::PointLine => "points + line",
                    };
                    ui.label(RichText::new(format!("{label} ({style})")).size(13.0));
                    ui.add_space(10.0);
                }
            });
            ui.add_space(4.0);
        }

        let reset = self.take_reset(revision);
        ChartPlotter::draw_figure(ui, figure, reset);
    }
}
