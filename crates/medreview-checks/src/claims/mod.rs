//! Numeric claim extraction and same-item conflict detection.

mod conflicts;
mod extractor;

pub use conflicts::{claim_shape, find_conflicts};
pub use extractor::{extract_claims, ClaimExtractor};
