//! Degradation tracking for auto-check sub-checks.

pub mod tracker;

pub use tracker::{
    component_name, DegradationTracker, RecoveryStatus, TrackedDegradation,
    MAX_TRACKED_EVENTS, RECOVERED_RETENTION_SECS,
};
