//! Configuration for every subsystem, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! built-in defaults and a partial document overrides only what it names.

mod checks_config;
pub mod defaults;
mod intake_config;
mod observability_config;
mod storage_config;

pub use checks_config::{ChecksConfig, ClaimMode, NoClaimsCoverage};
pub use intake_config::IntakeConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ReviewError, ReviewResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub checks: ChecksConfig,
    pub intake: IntakeConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl ReviewConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> ReviewResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> ReviewResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            ReviewError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Reject values no subsystem can work with.
    pub fn validate(&self) -> ReviewResult<()> {
        self.checks.validate()?;
        self.intake.validate()?;
        Ok(())
    }
}
