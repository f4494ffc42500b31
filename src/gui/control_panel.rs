//! Control Panel Widget
//! Plot buttons, selection shortcuts and the status line.

use crate::charts::ChartKind;
use crate::workbench::{Status, StatusLevel, UiAction};
use egui::{Color32, RichText};

pub struct ControlPanel;

impl ControlPanel {
    /// Draw the controls. `enabled` is false until a table is loaded.
    pub fn show(ui: &mut egui::Ui, enabled: bool, selected: usize, status: &Status) -> UiAction {
        let mut action = UiAction::None;

        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                for kind in ChartKind::ALL {
                    let button = egui::Button::new(RichText::new(kind.button_label()).size(14.0))
                        .min_size(egui::vec2(120.0, 30.0));
                    if ui.add(button).clicked() {
                        action = UiAction::Plot(kind);
                    }
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                if ui.small_button("Select All").clicked() {
                    action = UiAction::SelectAll;
                }
                if ui.small_button("Clear Selection").clicked() {
                    action = UiAction::ClearSelection;
                }
                ui.label(
                    RichText::new(format!("{selected} cells selected"))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
        });

        ui.add_space(5.0);
        ui.separator();

        let status_color = match status.level {
            StatusLevel::Error => Color32::from_rgb(220, 53, 69),
            StatusLevel::Info => Color32::GRAY,
        };
        ui.label(RichText::new(&status.message).size(11.0).color(status_color));

        action
    }
}
