//! Input adapters - produce `RawTable`s from external sources.

mod csv_table_reader;

pub use csv_table_reader::{CsvTableReader, TableReadError};
