//! CSV Chart Editor - CSV table editing with embedded line and scatter charts
//!
//! Loads a CSV file into an editable grid and plots selected columns.

mod charts;
mod config;
mod data;
mod gui;
mod presenter;
mod workbench;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, Args};
use eframe::egui;
use gui::CsvChartApp;
use std::path::Path;
use workbench::Workbench;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match AppConfig::from_args(&args).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            show_startup_error(&e);
            return Err(e);
        }
    };

    // A CSV named at startup must load, otherwise there is no session to show.
    let mut workbench = Workbench::new(config.clone());
    if let Some(path) = &config.initial_csv {
        if let Err(e) = load_initial_csv(&mut workbench, path) {
            show_startup_error(&e);
            return Err(e);
        }
    }

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0])
            .with_title("CSV Chart Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CSV Chart Editor",
        options,
        Box::new(move |cc| Ok(Box::new(CsvChartApp::new(cc, workbench)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}

fn load_initial_csv(workbench: &mut Workbench, path: &Path) -> anyhow::Result<()> {
    workbench
        .load_csv(path)
        .with_context(|| format!("Cannot open {}", path.display()))
}

/// Startup may come from a desktop launcher with no terminal, so fatal
/// errors also go to a message box.
fn show_startup_error(err: &anyhow::Error) {
    tracing::error!("{err:#}");
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("CSV Chart Editor")
        .set_description(format!("{err:#}"))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn startup_error_names_file_and_cause() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A,B\n1\n").unwrap();
        let mut workbench = Workbench::new(AppConfig::default());

        let err = load_initial_csv(&mut workbench, file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("expected 2 cells, found 1"));
        assert!(workbench.presenter().is_none());
    }

    #[test]
    fn startup_csv_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A,B\n1,2\n").unwrap();
        let mut workbench = Workbench::new(AppConfig::default());

        load_initial_csv(&mut workbench, file.path()).unwrap();
        assert_eq!(workbench.presenter().unwrap().row_count(), 1);
    }
}
