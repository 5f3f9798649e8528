//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking core and the outside world. Adapters implement these ports.
//!
//! - `ResultExporter` - Serializes a result table (CSV, HTML, JSON)
//! - `ResultNotifier` - Delivers an exported result to a recipient

mod result_exporter;
mod result_notifier;

pub use result_exporter::{ExportError, ExportFormat, ExportedResult, ResultExporter};
pub use result_notifier::{DeliveryReceipt, NotificationError, Recipient, ResultNotifier};
