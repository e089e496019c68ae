//! # medreview-observability
//!
//! Subscriber setup, per-operation spans and tracking of auto-check
//! sub-checks that fell back to their defaults.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::init;
