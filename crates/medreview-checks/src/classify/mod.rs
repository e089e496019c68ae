//! Vocabulary-based tagging: Bloom level and competency domains.

pub mod bloom;
pub mod competency;

pub use bloom::classify_bloom;
pub use competency::suggest_competencies;
