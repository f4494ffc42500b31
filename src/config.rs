//! Application configuration: JSON settings file and command line.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Command line arguments.
#[derive(Parser, Debug, Default)]
#[command(version, about = "Edit a CSV table and plot selected columns")]
pub struct Args {
    /// CSV file to open at startup
    pub csv: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// User settings. Every field has a default, so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub initial_csv: Option<PathBuf>,
    pub export_size: (u32, u32),
    pub open_after_export: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 800.0],
            initial_csv: None,
            export_size: (1200, 900),
            open_after_export: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve settings from the command line: file first, then flags.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(csv) = &args.csv {
            config.initial_csv = Some(csv.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "open_after_export": false }}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert!(!config.open_after_export);
        assert_eq!(config.export_size, AppConfig::default().export_size);
    }

    #[test]
    fn csv_argument_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_csv": "a.csv" }}"#).unwrap();
        let args = Args {
            csv: Some(PathBuf::from("b.csv")),
            config: Some(file.path().to_path_buf()),
        };
        let config = AppConfig::from_args(&args).unwrap();
        assert_eq!(config.initial_csv, Some(PathBuf::from("b.csv")));
    }

    #[test]
    fn bad_files_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::load(&dir.path().join("none.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn args_parse_positional_csv() {
        let args = Args::parse_from(["csv-chart-editor", "data.csv", "--config", "c.json"]);
        assert_eq!(args.csv, Some(PathBuf::from("data.csv")));
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
    }
}
