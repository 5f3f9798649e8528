//! TOPSIS Ranker - Multi-criteria ranking of alternatives
//!
//! This crate ranks alternatives scored on several numeric criteria using
//! TOPSIS (Technique for Order Preference by Similarity to Ideal Solution).
//! The pure core lives in [`domain::topsis`]; reading CSV input, rendering
//! results and emailing them are adapters around it.
//!
//! ```
//! use topsis_ranker::domain::topsis::{RawTable, TopsisRanker};
//!
//! let table = RawTable::builder()
//!     .headers(vec!["Model", "Price", "Storage"])
//!     .row(vec!["M1", "250", "16"])
//!     .row(vec!["M2", "200", "32"])
//!     .build();
//!
//! let result = TopsisRanker::rank(&table, "1,1", "-,+").unwrap();
//! assert_eq!(result.best().unwrap().identifier, "M2");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
