//! CSV Chart Editor Main Application
//! Menu bar, table with plot controls on the right, chart on the left.

use crate::gui::{ChartViewer, ControlPanel, TableView};
use crate::workbench::{UiAction, Workbench};
use egui::{Color32, RichText, SidePanel};

/// Main application window.
pub struct CsvChartApp {
    workbench: Workbench,
    chart_viewer: ChartViewer,
}

impl CsvChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, workbench: Workbench) -> Self {
        Self {
            workbench,
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Menu bar: "Open" > "Load CSV", "Edit" > "Edit Table", "Export PNG".
    fn show_menu(&self, ui: &mut egui::Ui) -> UiAction {
        let mut action = UiAction::None;
        let has_table = self.workbench.presenter().is_some();
        let editing = self
            .workbench
            .presenter()
            .is_some_and(|p| p.is_editable());

        egui::menu::bar(ui, |ui| {
            ui.menu_button("Open", |ui| {
                if ui.button("Load CSV").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV Files", &["csv"])
                        .pick_file()
                    {
                        action = UiAction::LoadCsv(path);
                    }
                }
            });

            ui.menu_button("Edit", |ui| {
                let label = if editing { "✔ Edit Table" } else { "Edit Table" };
                if ui.add_enabled(has_table, egui::Button::new(label)).clicked() {
                    ui.close_menu();
                    action = UiAction::ToggleEditMode;
                }
            });

            ui.menu_button("Export", |ui| {
                let enabled = !self.workbench.figure().is_empty();
                if ui
                    .add_enabled(enabled, egui::Button::new("Export PNG…"))
                    .clicked()
                {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("PNG Image", &["png"])
                        .set_file_name("chart.png")
                        .save_file()
                    {
                        action = UiAction::ExportPng(path);
                    }
                }
            });
        });

        action
    }
}

impl eframe::App for CsvChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            actions.push(self.show_menu(ui));
        });

        // Right panel - table and plot controls
        SidePanel::right("table_panel")
            .min_width(350.0)
            .default_width(500.0)
            .resizable(true)
            .show(ctx, |ui| {
                let title = self
                    .workbench
                    .source()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file loaded".to_string());
                ui.label(RichText::new(title).size(14.0).strong());
                ui.separator();

                let selected = self
                    .workbench
                    .presenter()
                    .map(|p| p.selection().len())
                    .unwrap_or(0);
                let status = self.workbench.status().clone();
                let enabled = self.workbench.presenter().is_some();

                egui::TopBottomPanel::bottom("controls")
                    .resizable(false)
                    .show_inside(ui, |ui| {
                        ui.add_space(5.0);
                        actions.push(ControlPanel::show(ui, enabled, selected, &status));
                    });

                egui::CentralPanel::default().show_inside(ui, |ui| {
                    match self.workbench.presenter_mut() {
                        Some(presenter) => TableView::show(ui, presenter),
                        None => {
                            ui.centered_and_justified(|ui| {
                                ui.label(
                                    RichText::new("Open > Load CSV to begin")
                                        .size(16.0)
                                        .color(Color32::GRAY),
                                );
                            });
                        }
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer
                .show(ui, self.workbench.figure(), self.workbench.revision());
        });

        for action in actions {
            if action != UiAction::None {
                self.workbench.handle(action);
            }
        }
    }
}
