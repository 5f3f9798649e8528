//! Export adapters - `ResultExporter` implementations.

mod csv_exporter;
mod html_exporter;
mod json_exporter;

use std::sync::Arc;

pub use csv_exporter::CsvResultExporter;
pub use html_exporter::HtmlResultExporter;
pub use json_exporter::JsonResultExporter;

use crate::ports::{ExportFormat, ResultExporter};

/// Returns the exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Arc<dyn ResultExporter> {
    match format {
        ExportFormat::Csv => Arc::new(CsvResultExporter::default()),
        ExportFormat::Html => Arc::new(HtmlResultExporter::new()),
        ExportFormat::Json => Arc::new(JsonResultExporter),
    }
}
