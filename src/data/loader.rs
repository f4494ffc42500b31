//! CSV Loader Module
//! Reads a comma-delimited file with a header row into a [`CsvTable`].

use super::CsvTable;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected {expected} cells, found {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("CSV file has no header row")]
    Empty,
}

/// Loads CSV files into string tables.
///
/// Cells are kept verbatim: no trimming and no numeric coercion. A row whose
/// width differs from the header is rejected instead of padded.
pub struct CsvLoader;

impl CsvLoader {
    /// Load a CSV file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<CsvTable, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::File {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded CSV"
        );
        Ok(table)
    }

    /// Parse CSV data from any reader. The first record is the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<CsvTable, LoaderError> {
        // Flexible so width mismatches surface as `Ragged` with our own message.
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();
        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(LoaderError::Empty),
        };
        if header.is_empty() {
            return Err(LoaderError::Empty);
        }

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            if record.len() != header.len() {
                return Err(LoaderError::Ragged {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: header.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(columns = header.len(), rows = rows.len(), "parsed CSV records");
        Ok(CsvTable::from_parts(header, rows))
    }
}
