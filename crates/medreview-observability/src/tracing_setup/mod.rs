//! Global subscriber installation plus span and event helpers.

pub mod events;
pub mod spans;

use medreview_core::config::ObservabilityConfig;
use medreview_core::errors::{ReviewError, ReviewResult};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` overrides `config.log_level`. Returns `Ok(false)` when a
/// subscriber is already installed, so repeated calls are harmless.
pub fn init(config: &ObservabilityConfig) -> ReviewResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ReviewError::ConfigError(format!(
                "observability.log_level '{}': {e}",
                config.log_level
            ))
        })?,
    };

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    };
    Ok(installed)
}
