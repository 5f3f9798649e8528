//! CSV exporter for ranked results.

use crate::domain::topsis::ResultTable;
use crate::ports::{ExportError, ExportFormat, ExportedResult, ResultExporter};

/// Writes the result table as comma-separated values.
///
/// Criterion values keep their shortest round-trip form, scores are printed
/// with six decimals.
#[derive(Debug, Clone)]
pub struct CsvResultExporter {
    base_filename: String,
}

impl CsvResultExporter {
    pub fn new(base_filename: impl Into<String>) -> Self {
        Self {
            base_filename: base_filename.into(),
        }
    }

    fn write(&self, table: &ResultTable) -> Result<String, String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(table.headers()).map_err(|e| e.to_string())?;

        for row in table.rows() {
            let mut record = Vec::with_capacity(row.criteria.len() + 3);
            record.push(row.identifier.clone());
            record.extend(row.criteria.iter().map(|value| value.to_string()));
            record.push(row.score.to_string());
            record.push(row.rank.to_string());
            writer.write_record(&record).map_err(|e| e.to_string())?;
        }

        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        String::from_utf8(bytes).map_err(|e| e.to_string())
    }
}

impl Default for CsvResultExporter {
    fn default() -> Self {
        Self::new("result")
    }
}

impl ResultExporter for CsvResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, table: &ResultTable) -> Result<ExportedResult, ExportError> {
        let content = self
            .write(table)
            .map_err(|reason| ExportError::write_failed(ExportFormat::Csv, reason))?;
        Ok(ExportedResult::new(content, ExportFormat::Csv, &self.base_filename))
    }
}
