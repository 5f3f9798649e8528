//! CSV table reader.
//!
//! Reads an uploaded CSV document into a `RawTable`. Only the file-level
//! concerns live here (extension, header row, encoding); numeric checks are
//! left to the validator so every input source gets the same diagnostics.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::domain::topsis::RawTable;

/// Errors raised while reading tabular input.
#[derive(Debug, Error)]
pub enum TableReadError {
    #[error("Upload CSV file only: '{0}'")]
    NotCsv(String),

    #[error("Input file is empty")]
    Empty,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Malformed(String),
}

/// Reads CSV documents with a header row.
pub struct CsvTableReader;

impl CsvTableReader {
    /// Reads a `.csv` file from disk.
    pub fn from_path(path: &Path) -> Result<RawTable, TableReadError> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(TableReadError::NotCsv(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads CSV content already held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<RawTable, TableReadError> {
        Self::from_reader(bytes)
    }

    /// Reads CSV from any reader.
    ///
    /// Rows may have differing widths; the validator reports those. Rows
    /// made only of blank cells are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<RawTable, TableReadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|err| TableReadError::Malformed(err.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(TableReadError::Empty);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| TableReadError::Malformed(err.to_string()))?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.iter().all(String::is_empty) {
                continue;
            }
            rows.push(cells);
        }

        Ok(RawTable::new(headers, rows))
    }
}
