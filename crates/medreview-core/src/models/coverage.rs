use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{LOW_COVERAGE_RATIO, MEDIUM_COVERAGE_RATIO};
use crate::errors::ReviewError;

/// How well an item's references back its numeric claims.
///
/// This is the canonical stored representation. Deployments that display a
/// continuous 0–1 ratio convert with [`CoverageLevel::ratio`] and
/// [`CoverageLevel::from_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    Low,
    Medium,
    High,
}

impl CoverageLevel {
    /// Bucket a continuous coverage ratio: `>= 0.8` high, `>= 0.5` medium, else low.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= LOW_COVERAGE_RATIO {
            Self::High
        } else if ratio >= MEDIUM_COVERAGE_RATIO {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Representative ratio for display: 1.0, 0.5 or 0.0.
    pub fn ratio(self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::Medium => 0.5,
            Self::Low => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CoverageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageLevel {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ReviewError::validation(
                "reference_coverage",
                format!("unknown coverage level '{other}'"),
            )),
        }
    }
}
