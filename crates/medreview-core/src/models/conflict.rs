use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Two numeric claims in the same item with the same shape but different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericConflict {
    pub first: String,
    pub second: String,
    /// The claim text with digits and decimal points removed, shared by both claims.
    pub shape: String,
}

impl NumericConflict {
    /// Human-readable description, e.g. `60-100 bpm vs 70-110 bpm`.
    pub fn description(&self) -> String {
        format!("{} vs {}", self.first, self.second)
    }
}

impl fmt::Display for NumericConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}
