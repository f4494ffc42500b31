//! Session core: owns the table presenter and the figure, and handles the
//! actions emitted by the widgets. Nothing here touches egui.

use crate::charts::{self, ChartKind, ChartRenderer, ExportError, Figure, RenderError};
use crate::config::AppConfig;
use crate::data::{CsvLoader, LoaderError, MapperError, SeriesMapper};
use crate::presenter::TablePresenter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum WorkbenchError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Map(#[from] MapperError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("No CSV file loaded")]
    NoTable,
}

/// Actions triggered by the menu, the plot buttons and the table.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    None,
    LoadCsv(PathBuf),
    ToggleEditMode,
    Plot(ChartKind),
    SelectAll,
    ClearSelection,
    ExportPng(PathBuf),
}

/// Result of a plot request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotOutcome {
    Drawn,
    /// Empty selection: nothing was drawn and the figure is unchanged.
    NothingSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Status line shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }
}

pub struct Workbench {
    config: AppConfig,
    presenter: Option<TablePresenter>,
    source: Option<PathBuf>,
    figure: Figure,
    revision: u64,
    status: Status,
}

impl Workbench {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            presenter: None,
            source: None,
            figure: Figure::new(),
            revision: 0,
            status: Status::info("Ready"),
        }
    }

    pub fn presenter(&self) -> Option<&TablePresenter> {
        self.presenter.as_ref()
    }

    pub fn presenter_mut(&mut self) -> Option<&mut TablePresenter> {
        self.presenter.as_mut()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Bumped whenever the figure is redrawn or cleared.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Replace the table with the contents of `path`.
    ///
    /// On failure the current table, selection and chart are kept.
    pub fn load_csv(&mut self, path: &Path) -> Result<(), WorkbenchError> {
        let table = CsvLoader::load(path)?;
        self.status = Status::info(format!(
            "Loaded {} rows, {} columns",
            table.row_count(),
            table.column_count()
        ));
        self.presenter = Some(TablePresenter::new(table));
        self.source = Some(path.to_path_buf());
        self.figure.clear();
        self.revision += 1;
        Ok(())
    }

    pub fn toggle_edit_mode(&mut self) -> Result<bool, WorkbenchError> {
        let presenter = self.presenter.as_mut().ok_or(WorkbenchError::NoTable)?;
        let editable = !presenter.is_editable();
        presenter.set_editable(editable);
        self.status = Status::info(if editable {
            "Editing enabled"
        } else {
            "Editing disabled"
        });
        Ok(editable)
    }

    /// Map the current selection and redraw the chart.
    ///
    /// Plots the live table, so edits made in the grid are reflected.
    pub fn plot(&mut self, kind: ChartKind) -> Result<PlotOutcome, WorkbenchError> {
        let presenter = self.presenter.as_ref().ok_or(WorkbenchError::NoTable)?;
        let Some(request) = SeriesMapper::map(presenter.table(), presenter.selection(), kind)?
        else {
            return Ok(PlotOutcome::NothingSelected);
        };

        ChartRenderer::render(&mut self.figure, &request)?;
        self.revision += 1;
        info!(?kind, x = %request.x.label, series = request.ys.len(), "plotted selection");
        self.status = Status::info(format!(
            "Plotted {} series against {}",
            request.ys.len(),
            request.x.label
        ));
        Ok(PlotOutcome::Drawn)
    }

    pub fn export_png(&mut self, path: &Path) -> Result<(), WorkbenchError> {
        charts::export_png(&self.figure, path, self.config.export_size)?;
        self.status = Status::info(format!("Exported {}", path.display()));
        if self.config.open_after_export {
            if let Err(e) = open::that(path) {
                warn!(path = %path.display(), "cannot open exported chart: {e}");
            }
        }
        Ok(())
    }

    /// Run one UI action. Errors become an error status; the chart is kept.
    pub fn handle(&mut self, action: UiAction) {
        let result = match action {
            UiAction::None => Ok(()),
            UiAction::LoadCsv(path) => self.load_csv(&path),
            UiAction::ToggleEditMode => self.toggle_edit_mode().map(|_| ()),
            UiAction::Plot(kind) => self.plot(kind).map(|_| ()),
            UiAction::SelectAll => self
                .presenter
                .as_mut()
                .map(TablePresenter::select_all)
                .ok_or(WorkbenchError::NoTable),
            UiAction::ClearSelection => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.selection_mut().clear();
                }
                Ok(())
            }
            UiAction::ExportPng(path) => self.export_png(&path),
        };

        if let Err(e) = result {
            error!("action failed: {e}");
            self.status = Status::error(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellIndex;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn loaded() -> (Workbench, NamedTempFile) {
        let file = csv_file("A,B,C\n1,10,100\n2,20,200\n");
        let mut bench = Workbench::new(AppConfig::default());
        bench.load_csv(file.path()).unwrap();
        (bench, file)
    }

    fn select_columns(bench: &mut Workbench, columns: &[usize]) {
        let presenter = bench.presenter_mut().unwrap();
        presenter.selection_mut().clear();
        for &c in columns {
            presenter.select_column(c, true);
        }
    }

    #[test]
    fn load_builds_presenter() {
        let (bench, file) = loaded();
        let presenter = bench.presenter().unwrap();
        assert_eq!(presenter.row_count(), 2);
        assert_eq!(presenter.headers(), ["A", "B", "C"]);
        assert_eq!(bench.source(), Some(file.path()));
        assert_eq!(bench.status().level, StatusLevel::Info);
    }

    #[test]
    fn plot_draws_selected_columns() {
        let (mut bench, _file) = loaded();
        select_columns(&mut bench, &[0, 1]);
        assert_eq!(bench.plot(ChartKind::Line).unwrap(), PlotOutcome::Drawn);

        let axes = bench.figure().axes().unwrap();
        assert_eq!(axes.traces.len(), 1);
        assert_eq!(axes.traces[0].points, vec![[1.0, 10.0], [2.0, 20.0]]);
        assert_eq!(axes.annotations[0].text, "B");
    }

    #[test]
    fn empty_selection_keeps_previous_chart() {
        let (mut bench, _file) = loaded();
        select_columns(&mut bench, &[0, 2]);
        bench.plot(ChartKind::Scatter).unwrap();
        let before = bench.figure().clone();
        let revision = bench.revision();

        bench.handle(UiAction::ClearSelection);
        assert_eq!(
            bench.plot(ChartKind::Line).unwrap(),
            PlotOutcome::NothingSelected
        );
        assert_eq!(bench.figure(), &before);
        assert_eq!(bench.revision(), revision);
    }

    #[test]
    fn replotting_is_idempotent() {
        let (mut bench, _file) = loaded();
        select_columns(&mut bench, &[0, 1, 2]);
        bench.plot(ChartKind::SmoothedScatter).unwrap();
        let first = bench.figure().clone();
        bench.plot(ChartKind::SmoothedScatter).unwrap();
        assert_eq!(bench.figure(), &first);
    }

    #[test]
    fn errors_surface_as_status_and_keep_chart() {
        let (mut bench, _file) = loaded();
        select_columns(&mut bench, &[0, 1]);
        bench.plot(ChartKind::Line).unwrap();
        let before = bench.figure().clone();

        bench
            .presenter_mut()
            .unwrap()
            .set_cell(1, 1, "not a number");
        bench.handle(UiAction::Plot(ChartKind::Line));

        assert_eq!(bench.status().level, StatusLevel::Error);
        assert!(bench.status().message.contains("not a number"));
        assert_eq!(bench.figure(), &before);
    }

    #[test]
    fn plotting_uses_live_edits() {
        let (mut bench, _file) = loaded();
        bench.handle(UiAction::ToggleEditMode);
        assert!(bench.presenter().unwrap().is_editable());
        bench.presenter_mut().unwrap().set_cell(0, 1, "15");

        select_columns(&mut bench, &[0, 1]);
        bench.plot(ChartKind::Line).unwrap();
        let axes = bench.figure().axes().unwrap();
        assert_eq!(axes.traces[0].points[0], [1.0, 15.0]);
    }

    #[test]
    fn failed_reload_keeps_current_table() {
        let (mut bench, _file) = loaded();
        let ragged = csv_file("A,B,C\n1,2\n");
        bench.handle(UiAction::LoadCsv(ragged.path().to_path_buf()));

        assert_eq!(bench.status().level, StatusLevel::Error);
        assert_eq!(bench.presenter().unwrap().column_count(), 3);
        assert_eq!(bench.presenter().unwrap().row_count(), 2);
    }

    #[test]
    fn reload_resets_selection_and_chart() {
        let (mut bench, _file) = loaded();
        select_columns(&mut bench, &[0, 1]);
        bench.plot(ChartKind::Line).unwrap();

        let other = csv_file("x,y\n0,1\n");
        bench.handle(UiAction::LoadCsv(other.path().to_path_buf()));
        assert!(bench.figure().is_empty());
        assert!(bench.presenter().unwrap().selection().is_empty());
        assert_eq!(bench.presenter().unwrap().headers(), ["x", "y"]);
    }

    #[test]
    fn actions_without_table_report_an_error() {
        let mut bench = Workbench::new(AppConfig::default());
        bench.handle(UiAction::Plot(ChartKind::Line));
        assert_eq!(bench.status().level, StatusLevel::Error);
        assert!(matches!(
            bench.toggle_edit_mode(),
            Err(WorkbenchError::NoTable)
        ));
    }

    #[test]
    fn export_without_chart_is_an_error() {
        let (mut bench, _file) = loaded();
        let dir = tempfile::tempdir().unwrap();
        bench.handle(UiAction::ExportPng(dir.path().join("chart.png")));
        assert_eq!(bench.status().level, StatusLevel::Error);
    }

    fn quiet_config() -> AppConfig {
        AppConfig {
            open_after_export: false,
            ..AppConfig::default()
        }
    }

    #[test]
    fn export_writes_png_of_current_chart() {
        let file = csv_file("A,B\n0,1\n1,4\n2,9\n");
        let mut bench = Workbench::new(quiet_config());
        bench.load_csv(file.path()).unwrap();
        bench.handle(UiAction::SelectAll);
        bench.plot(ChartKind::SmoothedScatter).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        bench.export_png(&path).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        assert_eq!(bench.status().level, StatusLevel::Info);
    }

    #[test]
    fn non_finite_cells_fail_plot_and_export_returns() {
        let file = csv_file("A,B\ninf,1\n1,2\n");
        let mut bench = Workbench::new(quiet_config());
        bench.load_csv(file.path()).unwrap();
        bench.handle(UiAction::SelectAll);

        assert!(matches!(
            bench.plot(ChartKind::Line),
            Err(WorkbenchError::Map(MapperError::NotNumeric { row: 0, column: 0, .. }))
        ));
        assert!(bench.figure().is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        bench.handle(UiAction::ExportPng(path.clone()));
        assert_eq!(bench.status().level, StatusLevel::Error);
        assert!(!path.exists());
    }

    #[test]
    fn nan_cells_never_reach_the_figure() {
        let file = csv_file("A,B\nNaN,1\n2,2\n");
        let mut bench = Workbench::new(quiet_config());
        bench.load_csv(file.path()).unwrap();
        bench.handle(UiAction::SelectAll);
        bench.handle(UiAction::Plot(ChartKind::Line));

        assert_eq!(bench.status().level, StatusLevel::Error);
        assert!(bench.figure().is_empty());
    }

    #[test]
    fn select_all_then_plot_uses_first_column_as_x() {
        let (mut bench, _file) = loaded();
        bench.handle(UiAction::SelectAll);
        assert_eq!(bench.presenter().unwrap().selection().len(), 6);
        assert!(bench
            .presenter()
            .unwrap()
            .selection()
            .contains(CellIndex::new(1, 2)));
        bench.plot(ChartKind::Line).unwrap();
        let axes = bench.figure().axes().unwrap();
        assert_eq!(axes.traces.len(), 2);
        assert_eq!(axes.traces[1].label, "C");
    }
}
