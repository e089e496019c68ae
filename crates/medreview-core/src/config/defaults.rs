//! Default values shared by the config sections.

pub use crate::constants::DEFAULT_DUPLICATE_THRESHOLD;

pub const DEFAULT_MIN_MCQ_OPTIONS: usize = 4;
pub const DEFAULT_DB_PATH: &str = "medreview.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
