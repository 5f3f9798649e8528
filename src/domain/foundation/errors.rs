//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// One count that disagrees with the number of criterion columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    /// Which input the count belongs to ("weights" or "impacts").
    pub field: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} {}, got {}",
            self.expected, self.field, self.actual
        )
    }
}

/// Errors raised while loading and validating a decision problem.
///
/// Every variant is detected before any numeric work starts and carries
/// enough context to point at the violated constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Shape error: {reason}")]
    Shape { reason: String },

    #[error("Type error: non-numeric criterion value '{value}' at row {row}, column '{column}'")]
    Type {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Parse error: weight '{token}' at position {position} is not a number")]
    Parse { position: usize, token: String },

    #[error("Weight out of range: weight {value} at position {position} must be zero or positive")]
    WeightOutOfRange { position: usize, value: f64 },

    #[error("Domain error: impact '{token}' at position {position} must be '+' or '-'")]
    Domain { position: usize, token: String },

    #[error("Cardinality error: {}", join_mismatches(.mismatches))]
    Cardinality { mismatches: Vec<CountMismatch> },
}

fn join_mismatches(mismatches: &[CountMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates a shape error.
    pub fn shape(reason: impl Into<String>) -> Self {
        ValidationError::Shape {
            reason: reason.into(),
        }
    }

    /// Creates a type error for a criterion cell.
    pub fn non_numeric_cell(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Type {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates a parse error for a weight token.
    pub fn unparsable_weight(position: usize, token: impl Into<String>) -> Self {
        ValidationError::Parse {
            position,
            token: token.into(),
        }
    }

    /// Creates a domain error for an impact token.
    pub fn invalid_impact(position: usize, token: impl Into<String>) -> Self {
        ValidationError::Domain {
            position,
            token: token.into(),
        }
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Shape { .. } => ErrorCode::ShapeError,
            ValidationError::Type { .. } => ErrorCode::TypeError,
            ValidationError::Parse { .. } => ErrorCode::ParseError,
            ValidationError::WeightOutOfRange { .. } => ErrorCode::WeightOutOfRange,
            ValidationError::Domain { .. } => ErrorCode::DomainError,
            ValidationError::Cardinality { .. } => ErrorCode::CardinalityError,
        }
    }
}

/// Error codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ShapeError,
    TypeError,
    ParseError,
    WeightOutOfRange,
    DomainError,
    CardinalityError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::TypeError => "TYPE_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::WeightOutOfRange => "WEIGHT_OUT_OF_RANGE",
            ErrorCode::DomainError => "DOMAIN_ERROR",
            ErrorCode::CardinalityError => "CARDINALITY_ERROR",
        };
        write!(f, "{}", s)
    }
}
