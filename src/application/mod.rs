//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates the pure ranking core and coordinates the
//! export and delivery ports around it.

pub mod handlers;

pub use handlers::{
    DeliveryStatus, RankAlternativesCommand, RankAlternativesError, RankAlternativesHandler,
    RankAlternativesResult,
};
