//! Result Projector - Attaches scores and ranks to the original rows.

use super::result_table::{RANK_HEADER, SCORE_HEADER};
use super::{DecisionMatrix, ResultTable, ScoredRow};
use crate::domain::foundation::Score;

/// Re-assembly of engine output into a result table.
pub struct ResultProjector;

impl ResultProjector {
    /// Zips each alternative with its score and rank, then sorts by rank.
    ///
    /// `scores` and `ranks` are parallel to `matrix.alternatives()`. The sort
    /// is stable, so tied rows keep their input order. No recomputation.
    pub fn project(matrix: &DecisionMatrix, scores: &[Score], ranks: &[u32]) -> ResultTable {
        let mut headers = Vec::with_capacity(matrix.criterion_count() + 3);
        headers.push(matrix.identifier_header().to_string());
        headers.extend(matrix.criteria().iter().cloned());
        headers.push(SCORE_HEADER.to_string());
        headers.push(RANK_HEADER.to_string());

        let mut rows: Vec<ScoredRow> = matrix
            .alternatives()
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(alternative, (&score, &rank))| ScoredRow {
                identifier: alternative.identifier.clone(),
                criteria: alternative.values.clone(),
                score,
                rank,
            })
            .collect();

        rows.sort_by_key(|row| row.rank);

        ResultTable::new(headers, rows)
    }
}
