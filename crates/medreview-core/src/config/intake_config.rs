use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ReviewError, ReviewResult};

/// Submission rules applied by the intake and edit handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Minimum number of answer options for an MCQ.
    pub min_mcq_options: usize,
    /// Reject submissions whose numeric claims have no page-cited reference.
    pub require_page_for_numeric_claims: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            min_mcq_options: defaults::DEFAULT_MIN_MCQ_OPTIONS,
            require_page_for_numeric_claims: false,
        }
    }
}

impl IntakeConfig {
    pub fn validate(&self) -> ReviewResult<()> {
        if self.min_mcq_options < 2 {
            return Err(ReviewError::ConfigError(format!(
                "intake.min_mcq_options must be at least 2, got {}",
                self.min_mcq_options
            )));
        }
        Ok(())
    }
}
