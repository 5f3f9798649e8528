//! Ranking command handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    DeliveryStatus, RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult,
};
