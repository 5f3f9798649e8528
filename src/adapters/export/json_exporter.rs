//! JSON exporter for ranked results.

use crate::domain::topsis::ResultTable;
use crate::ports::{ExportError, ExportFormat, ExportedResult, ResultExporter};

/// Serializes the result table with `serde_json`.
#[derive(Debug, Clone, Default)]
pub struct JsonResultExporter;

impl ResultExporter for JsonResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, table: &ResultTable) -> Result<ExportedResult, ExportError> {
        let content = serde_json::to_string_pretty(table)
            .map_err(|e| ExportError::write_failed(ExportFormat::Json, e.to_string()))?;
        Ok(ExportedResult::new(content, ExportFormat::Json, "result"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{RawTable, TopsisRanker};

    #[test]
    fn export_is_parseable_json() {
        let raw = RawTable::builder()
            .headers(vec!["Id", "C1"])
            .row(vec!["A", "1"])
            .row(vec!["B", "3"])
            .build();
        let table = TopsisRanker::rank(&raw, "1", "-").unwrap();

        let exported = JsonResultExporter.export(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported.content).unwrap();

        assert_eq!(value["rows"][0]["identifier"], "A");
        assert_eq!(value["rows"][0]["rank"], 1);
        assert_eq!(exported.content_type, "application/json");
    }
}
