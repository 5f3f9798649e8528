//! Score value object (closeness coefficient, 0.0-1.0, six decimals).

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Number of decimal digits kept on a score.
pub const SCORE_DECIMALS: i32 = 6;

/// Relative closeness to the ideal solution, rounded to six decimals.
///
/// Only produced by the engine, so it serializes but does not deserialize.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Score of the worst possible alternative.
    pub const MIN: Self = Self(0.0);

    /// Score of the ideal alternative.
    pub const MAX: Self = Self(1.0);

    /// Score assigned when an alternative coincides with both ideals.
    pub const TIE_SENTINEL: Self = Self(0.5);

    /// Creates a score from a raw closeness value.
    ///
    /// Rounds half away from zero to six decimals and clamps into [0, 1].
    /// `raw` must be finite.
    pub(crate) fn from_raw(raw: f64) -> Self {
        debug_assert!(raw.is_finite(), "closeness must be finite, got {}", raw);
        let factor = 10f64.powi(SCORE_DECIMALS);
        let rounded = (raw * factor).round() / factor;
        Self(rounded.clamp(0.0, 1.0))
    }

    /// Returns the rounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Orders scores from best to worst.
    pub fn cmp_desc(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", SCORE_DECIMALS as usize, self.0)
    }
}
