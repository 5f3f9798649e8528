//! Application handlers.
//!
//! Command handlers that orchestrate the ranking core and its collaborators.

pub mod ranking;

pub use ranking::{
    DeliveryStatus, RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult,
};
