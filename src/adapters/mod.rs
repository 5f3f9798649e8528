//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the ranking core to external systems:
//! - `input` - CSV documents into raw tables
//! - `export` - CSV, HTML and JSON renderings of result tables
//! - `email` - Result delivery through Resend

pub mod email;
pub mod export;
pub mod input;

pub use email::{notifier_from_config, DisabledNotifier, ResendNotifier, ResendSettings};
pub use export::{exporter_for, CsvResultExporter, HtmlResultExporter, JsonResultExporter};
pub use input::{CsvTableReader, TableReadError};
