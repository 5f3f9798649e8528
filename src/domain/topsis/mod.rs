//! TOPSIS Module - Pure ranking of alternatives on multiple criteria.
//!
//! # Components
//!
//! - `RawTable` - Already-parsed text input (identifier column + criteria)
//! - `MatrixValidator` - Shape, type, weight, impact and cardinality checks
//! - `TopsisEngine` - Normalization, weighting, ideals, separation, closeness
//! - `ResultProjector` - Attaches score and rank, orders by rank
//! - `TopsisRanker` - The three stages composed
//!
//! # Design Philosophy
//!
//! Every stage is a pure, synchronous function of its inputs. Nothing is
//! cached between calls and no I/O happens here; reading files, rendering
//! and delivery belong to adapters.

mod decision_matrix;
mod engine;
mod projector;
mod ranker;
mod ranking;
mod raw_table;
mod result_table;
mod validator;

pub use decision_matrix::{
    Alternative, DecisionMatrix, DecisionProblem, ImpactVector, WeightVector,
};
pub use engine::{IdealSolution, Separation, TopsisEngine};
pub use projector::ResultProjector;
pub use ranker::TopsisRanker;
pub use ranking::competition_ranks;
pub use raw_table::{RawTable, RawTableBuilder};
pub use result_table::{ResultTable, ScoredRow, RANK_HEADER, SCORE_HEADER};
pub use validator::MatrixValidator;
