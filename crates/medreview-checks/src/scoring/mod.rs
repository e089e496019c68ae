//! Heuristic scores: reference coverage, groundedness and faithfulness.

pub mod coverage;
pub mod faithfulness;
pub mod groundedness;

pub use coverage::score_coverage;
pub use faithfulness::score_faithfulness;
pub use groundedness::score_groundedness;
