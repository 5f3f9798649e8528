//! Ranker - Validation, computation and projection in one call.

use tracing::debug;

use super::{MatrixValidator, RawTable, ResultTable, TopsisEngine};
use crate::domain::foundation::ValidationError;

/// Entry point of the ranking core.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Ranks the alternatives of `raw` by TOPSIS closeness.
    ///
    /// All validation happens before any arithmetic; once the input is
    /// accepted this cannot fail. Identical inputs always give identical
    /// tables.
    pub fn rank(
        raw: &RawTable,
        weights_spec: &str,
        impacts_spec: &str,
    ) -> Result<ResultTable, ValidationError> {
        let problem = MatrixValidator::load_and_validate(raw, weights_spec, impacts_spec)
            .inspect_err(|err| {
                debug!(code = %err.code(), error = %err, "Rejected ranking input");
            })?;

        Ok(TopsisEngine::compute(&problem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn table() -> RawTable {
        RawTable::builder()
            .headers(vec!["Id", "C1", "C2"])
            .row(vec!["A", "1", "1"])
            .row(vec!["B", "2", "2"])
            .row(vec!["C", "3", "3"])
            .build()
    }

    #[test]
    fn rank_returns_ordered_table() {
        let result = TopsisRanker::rank(&table(), "1,1", "+,+").unwrap();
        assert_eq!(result.best().unwrap().identifier, "C");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn rank_surfaces_validation_errors() {
        let err = TopsisRanker::rank(&table(), "1,1", "+,x").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DomainError);
    }

    #[test]
    fn rank_is_idempotent() {
        let first = TopsisRanker::rank(&table(), "1,2", "+,-").unwrap();
        let second = TopsisRanker::rank(&table(), "1,2", "+,-").unwrap();
        assert_eq!(first, second);
    }
}
