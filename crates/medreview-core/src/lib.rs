//! # medreview-core
//!
//! Foundation crate for the medreview content-review system.
//! Defines the item model, auto-check result contract, errors, config,
//! constants, and the traits at the seams between the checker, its
//! callers, and storage. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReviewConfig;
pub use errors::{ReviewError, ReviewResult};
pub use item::{Item, ItemContent, ItemKind, ItemStatus, Reference};
pub use models::{AutoCheckResult, BloomLevel, CheckKind, CompetencyDomain, CoverageLevel};
