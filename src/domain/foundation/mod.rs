//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of
//! the ranking domain.

mod errors;
mod impact;
mod score;

pub use errors::{CountMismatch, ErrorCode, ValidationError};
pub use impact::{Impact, UnknownImpact};
pub use score::{Score, SCORE_DECIMALS};
