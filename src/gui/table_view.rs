//! Table View Widget
//! Grid of the loaded CSV with click, ctrl-click and shift-click selection.

use crate::data::CellIndex;
use crate::presenter::TablePresenter;
use egui::{Color32, RichText, TextEdit};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 24.0;

pub struct TableView;

impl TableView {
    /// Draw the grid and apply selection clicks to the presenter.
    ///
    /// In edit mode cells are text fields; changes are written back through
    /// [`TablePresenter::set_cell`].
    pub fn show(ui: &mut egui::Ui, presenter: &mut TablePresenter) {
        let rows = presenter.row_count();
        let columns = presenter.column_count();
        let editable = presenter.is_editable();
        let headers = presenter.headers().to_vec();
        let modifiers = ui.input(|i| i.modifiers);

        let mut header_clicked: Option<usize> = None;
        let mut cell_clicked: Option<CellIndex> = None;
        let mut edited: Option<(CellIndex, String)> = None;

        let table = presenter.table();
        let selection = presenter.selection();

        // Column widths are remembered per id; a new column count needs a fresh one.
        ui.push_id(("csv_table", columns), |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().at_least(60.0).clip(true), columns)
                .min_scrolled_height(0.0)
                .header(HEADER_HEIGHT, |mut header| {
                    for (c, name) in headers.iter().enumerate() {
                        header.col(|ui| {
                            if ui
                                .button(RichText::new(name).strong())
                                .on_hover_text("Select column (Ctrl to add)")
                                .clicked()
                            {
                                header_clicked = Some(c);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows, |mut row| {
                        let r = row.index();
                        for c in 0..columns {
                            row.col(|ui| {
                                let cell = CellIndex::new(r, c);
                                let text = table.cell(r, c).unwrap_or_default();
                                if editable {
                                    let mut value = text.to_string();
                                    let mut edit =
                                        TextEdit::singleline(&mut value).desired_width(f32::INFINITY);
                                    if selection.contains(cell) {
                                        edit = edit.background_color(ui.visuals().selection.bg_fill);
                                    }
                                    let response = ui.add(edit);
                                    if response.gained_focus() {
                                        cell_clicked = Some(cell);
                                    }
                                    if response.changed() {
                                        edited = Some((cell, value));
                                    }
                                } else if ui.selectable_label(selection.contains(cell), text).clicked()
                                {
                                    cell_clicked = Some(cell);
                                }
                            });
                        }
                    });
                });
        });

        if rows == 0 {
            ui.label(RichText::new("No data rows").color(Color32::GRAY));
        }

        if let Some((cell, value)) = edited {
            presenter.set_cell(cell.row, cell.column, value);
        }
        if let Some(column) = header_clicked {
            presenter.select_column(column, modifiers.command);
        }
        if let Some(cell) = cell_clicked {
            let selection = presenter.selection_mut();
            if modifiers.shift {
                selection.extend_to(cell);
            } else if modifiers.command {
                selection.toggle(cell);
            } else {
                selection.select_only(cell);
            }
        }
    }
}
