//! Matrix Validator - Turns raw text input into a checked decision problem.

use super::decision_matrix::parse_finite;
use super::{Alternative, DecisionMatrix, DecisionProblem, ImpactVector, RawTable, WeightVector};
use crate::domain::foundation::ValidationError;

/// Loading and validation of raw decision input.
pub struct MatrixValidator;

impl MatrixValidator {
    /// Validates a raw table together with its weight and impact specs.
    ///
    /// # Order
    /// 1. Shape: at least one criterion column, at least one row, no ragged rows
    /// 2. Every criterion cell parses as a finite float
    /// 3. Weight tokens parse as non-negative floats
    /// 4. Impact tokens are `+` or `-`
    /// 5. Weight and impact counts match the criterion count (both reported)
    ///
    /// The first failing stage wins. Row and position numbers are 1-based.
    pub fn load_and_validate(
        raw: &RawTable,
        weights_spec: &str,
        impacts_spec: &str,
    ) -> Result<DecisionProblem, ValidationError> {
        let matrix = Self::load_matrix(raw)?;
        let weights = WeightVector::parse(weights_spec)?;
        let impacts = ImpactVector::parse(impacts_spec)?;
        DecisionProblem::try_new(matrix, weights, impacts)
    }

    /// Converts the raw table into a numeric matrix.
    pub fn load_matrix(raw: &RawTable) -> Result<DecisionMatrix, ValidationError> {
        let width = raw.column_count();
        if width < 2 {
            return Err(ValidationError::shape("no criteria columns"));
        }
        if raw.is_empty() {
            return Err(ValidationError::shape("no alternatives"));
        }

        let criteria: Vec<String> = raw.headers[1..].to_vec();
        let mut alternatives = Vec::with_capacity(raw.row_count());

        for (row_index, row) in raw.rows.iter().enumerate() {
            let row_number = row_index + 1;
            if row.len() != width {
                return Err(ValidationError::shape(format!(
                    "row {} has {} cells, expected {}",
                    row_number,
                    row.len(),
                    width
                )));
            }

            let values = row[1..]
                .iter()
                .zip(&criteria)
                .map(|(cell, column)| {
                    parse_finite(cell.trim()).ok_or_else(|| {
                        ValidationError::non_numeric_cell(row_number, column.clone(), cell.clone())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            alternatives.push(Alternative::new(row[0].clone(), values));
        }

        DecisionMatrix::try_new(raw.headers[0].clone(), criteria, alternatives)
    }
}
