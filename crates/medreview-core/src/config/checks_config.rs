use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ReviewError, ReviewResult};
use crate::models::CompetencyDomain;

/// What counts as a numeric claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimMode {
    /// A number must carry `%` or a known unit. Bare numbers (page numbers,
    /// list indices) are not claims.
    #[default]
    UnitRequired,
    /// Any number counts; a trailing unit is captured when present.
    BareNumbers,
}

/// How reference coverage is graded for an item with no numeric claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoClaimsCoverage {
    /// Grade by reference count: none → low, one → medium, two or more → high.
    #[default]
    ReferenceCount,
    /// Nothing needs backing, so coverage is high regardless of references.
    Vacuous,
}

/// Auto-check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Similarity at or above which a sibling is reported as a possible duplicate.
    pub duplicate_threshold: f64,
    pub claim_mode: ClaimMode,
    /// Units recognised in addition to the built-in set.
    pub extra_units: Vec<String>,
    pub no_claims_coverage: NoClaimsCoverage,
    /// Competency suggested when no keyword matches.
    pub default_competency: CompetencyDomain,
    /// Evaluate independent sub-checks on the rayon pool.
    pub parallel: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: defaults::DEFAULT_DUPLICATE_THRESHOLD,
            claim_mode: ClaimMode::default(),
            extra_units: Vec::new(),
            no_claims_coverage: NoClaimsCoverage::default(),
            default_competency: CompetencyDomain::Anatomy,
            parallel: true,
        }
    }
}

impl ChecksConfig {
    pub fn validate(&self) -> ReviewResult<()> {
        if !(0.0..=1.0).contains(&self.duplicate_threshold) {
            return Err(ReviewError::ConfigError(format!(
                "checks.duplicate_threshold must be within [0, 1], got {}",
                self.duplicate_threshold
            )));
        }
        for unit in &self.extra_units {
            let valid = !unit.trim().is_empty()
                && unit.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');
            if !valid {
                return Err(ReviewError::ConfigError(format!(
                    "checks.extra_units entry '{unit}' must be non-empty letters, digits or spaces"
                )));
            }
        }
        Ok(())
    }
}
