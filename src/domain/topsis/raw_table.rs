//! Raw Table - Already-parsed tabular input, before validation.

use serde::{Deserialize, Serialize};

/// Text cells as delivered by an input source.
///
/// The first column holds alternative identifiers, every following column
/// is expected to hold a numeric criterion value. Nothing is checked here;
/// see [`MatrixValidator`](super::MatrixValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers, identifier header first.
    pub headers: Vec<String>,
    /// Data rows in input order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a raw table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a builder for constructing a raw table.
    pub fn builder() -> RawTableBuilder {
        RawTableBuilder::new()
    }

    /// Returns the number of columns declared by the header.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builder for constructing RawTable instances.
#[derive(Debug, Default)]
pub struct RawTableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headers.
    pub fn headers(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a data row.
    pub fn row(mut self, cells: Vec<impl Into<String>>) -> Self {
        self.rows.push(cells.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Builds the raw table.
    pub fn build(self) -> RawTable {
        RawTable {
            headers: self.headers,
            rows: self.rows,
        }
    }
}
