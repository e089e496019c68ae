//! # medreview-checks
//!
//! Automated content-quality checks run whenever an item is created or edited.
//!
//! ## Sub-checks
//! 1. **Duplicates**: bigram similarity against same-kind siblings
//! 2. **Numeric claims**: numbers with units, percentages, ranges
//! 3. **Conflicts**: claims with the same shape but different values
//! 4. **Reference coverage**: are claims backed by page-cited references
//! 5. **Bloom level** and **competency** tagging from fixed vocabularies
//! 6. **Groundedness** and **faithfulness** scores (0–5)
//!
//! The sub-checks share no state and are combined by [`AutoCheckEngine`],
//! which always returns a complete result.

pub mod claims;
pub mod classify;
pub mod duplicates;
pub mod engine;
pub mod scoring;
pub mod text;

pub use claims::{find_conflicts, ClaimExtractor};
pub use duplicates::find_duplicates;
pub use engine::AutoCheckEngine;
pub use text::{normalize, similarity};
