//! Decision Matrix - Validated alternatives, weights and impacts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CountMismatch, Impact, ValidationError};

/// One alternative: identifier plus its criterion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub identifier: String,
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(identifier: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            identifier: identifier.into(),
            values,
        }
    }
}

/// Alternatives x criteria, every row the same width.
///
/// Invariants: at least one criterion, at least one alternative, and every
/// alternative carries exactly one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    identifier_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a matrix, checking its shape.
    pub fn try_new(
        identifier_header: impl Into<String>,
        criteria: Vec<String>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::shape("no criteria columns"));
        }
        if alternatives.is_empty() {
            return Err(ValidationError::shape("no alternatives"));
        }
        let width = criteria.len();
        for (index, alternative) in alternatives.iter().enumerate() {
            if alternative.values.len() != width {
                return Err(ValidationError::shape(format!(
                    "row {} has {} criterion values, expected {}",
                    index + 1,
                    alternative.values.len(),
                    width
                )));
            }
        }
        Ok(Self {
            identifier_header: identifier_header.into(),
            criteria,
            alternatives,
        })
    }

    /// Header of the identifier column.
    pub fn identifier_header(&self) -> &str {
        &self.identifier_header
    }

    /// Criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Alternatives in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Number of alternatives (M).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (N).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Iterates over the values of one criterion column.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives.iter().map(move |a| a.values[index])
    }
}

/// One non-negative weight per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Parses a comma-separated weight specification such as `"1,1,2"`.
    ///
    /// Positions in errors are 1-based.
    pub fn parse(spec: &str) -> Result<Self, ValidationError> {
        let mut weights = Vec::new();
        for (index, raw) in spec.split(',').enumerate() {
            let token = raw.trim();
            let position = index + 1;
            let value = parse_finite(token)
                .ok_or_else(|| ValidationError::unparsable_weight(position, token))?;
            if value < 0.0 {
                return Err(ValidationError::WeightOutOfRange { position, value });
            }
            weights.push(value);
        }
        Ok(Self(weights))
    }

    /// Divides every weight by the largest one.
    ///
    /// Closeness depends only on weight ratios, so the result ranks the same
    /// while keeping weighted values within the normalized range. All-zero
    /// weights are returned unchanged.
    pub fn relative(&self) -> Self {
        let max = self.0.iter().copied().fold(0.0, f64::max);
        if max == 0.0 {
            return self.clone();
        }
        Self(self.0.iter().map(|w| w / max).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One preference direction per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Parses a comma-separated impact specification such as `"+,-,+"`.
    ///
    /// Tokens are trimmed; anything other than `+` or `-` fails with the
    /// 1-based position of the first offending token.
    pub fn parse(spec: &str) -> Result<Self, ValidationError> {
        spec.split(',')
            .enumerate()
            .map(|(index, raw)| {
                let token = raw.trim();
                token
                    .parse::<Impact>()
                    .map_err(|_| ValidationError::invalid_impact(index + 1, token))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A matrix with weights and impacts whose lengths agree with it.
///
/// This is the only input the engine accepts, so the engine never has to
/// re-check cardinality.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionProblem {
    matrix: DecisionMatrix,
    weights: WeightVector,
    impacts: ImpactVector,
}

impl DecisionProblem {
    /// Bundles the three inputs, reporting every count mismatch at once.
    pub fn try_new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        impacts: ImpactVector,
    ) -> Result<Self, ValidationError> {
        let expected = matrix.criterion_count();
        let mut mismatches = Vec::new();

        if weights.len() != expected {
            mismatches.push(CountMismatch {
                field: "weights",
                expected,
                actual: weights.len(),
            });
        }
        if impacts.len() != expected {
            mismatches.push(CountMismatch {
                field: "impacts",
                expected,
                actual: impacts.len(),
            });
        }

        if !mismatches.is_empty() {
            return Err(ValidationError::Cardinality { mismatches });
        }

        Ok(Self {
            matrix,
            weights,
            impacts,
        })
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn impacts(&self) -> &ImpactVector {
        &self.impacts
    }
}

/// Parses a trimmed token as a finite float.
pub(crate) fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
