//! Result Exporter Port - Serialization of ranked results.
//!
//! This port defines the contract for turning a `ResultTable` into a
//! transportable document (delimited text, HTML, JSON). The application
//! layer depends on this trait; adapters provide the formats.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::topsis::ResultTable;

/// Port for exporting a ranked result.
///
/// # Contract
///
/// Implementations must:
/// - Keep row order (rank 1 first) and column order
/// - Print scores with exactly six decimals
/// - Never recompute or re-rank
pub trait ResultExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Exports the table.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the writer fails.
    fn export(&self, table: &ResultTable) -> Result<ExportedResult, ExportError>;
}

/// Export formats for ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// HTML table fragment.
    Html,
    /// JSON document of the result table.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported result with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedResult {
    /// The exported content.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for attachments and downloads.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedResult {
    /// Create a new exported result named `<base_filename>.<ext>`.
    pub fn new(content: String, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during result export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The underlying writer failed.
    #[error("Failed to write {format} export: {reason}")]
    WriteFailed { format: ExportFormat, reason: String },
}

impl ExportError {
    /// Create a write failure.
    pub fn write_failed(format: ExportFormat, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            format,
            reason: reason.into(),
        }
    }
}
