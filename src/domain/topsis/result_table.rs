//! Result Table - Scored and ranked alternatives.

use serde::Serialize;

use crate::domain::foundation::Score;

/// Header of the appended score column.
pub const SCORE_HEADER: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_HEADER: &str = "Rank";

/// An input row with its score and rank appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    pub identifier: String,
    pub criteria: Vec<f64>,
    pub score: Score,
    /// 1 = best. Tied scores share a rank.
    pub rank: u32,
}

/// Rows ordered by ascending rank, with the column headers they came with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    headers: Vec<String>,
    rows: Vec<ScoredRow>,
}

impl ResultTable {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<ScoredRow>) -> Self {
        Self { headers, rows }
    }

    /// Original headers followed by the score and rank headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows, rank 1 first.
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Looks up a row by identifier (first match).
    pub fn row(&self, identifier: &str) -> Option<&ScoredRow> {
        self.rows.iter().find(|r| r.identifier == identifier)
    }

    /// The top-ranked row, if any. Ties resolve to the earliest input row.
    pub fn best(&self) -> Option<&ScoredRow> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
