//! Domain layer containing the ranking logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impacts, scores, errors)
//! - `topsis` - Validation, TOPSIS computation and result projection

pub mod foundation;
pub mod topsis;
