//! Impact value object: preference direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether larger or smaller values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// `+`: higher is better.
    Maximize,
    /// `-`: lower is better.
    Minimize,
}

impl Impact {
    /// Returns the symbol used in impact specifications.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Maximize => "+",
            Impact::Minimize => "-",
        }
    }
}

/// Error returned when a token is neither `+` nor `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownImpact(pub String);

impl FromStr for Impact {
    type Err = UnknownImpact;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Maximize),
            "-" => Ok(Impact::Minimize),
            other => Err(UnknownImpact(other.to_string())),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
