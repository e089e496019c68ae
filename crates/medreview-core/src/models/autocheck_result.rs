use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{BloomLevel, CompetencyDomain, CoverageLevel, NumericConflict};
use crate::constants::BASE_SCORE;

/// The independent sub-checks an auto-check run is made of.
///
/// Only sub-checks that read outside input can fail and appear in
/// [`AutoCheckResult::degraded`]; today that is the duplicate scan over the
/// sibling pool. The others are pure functions of the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Duplicates,
    Claims,
    Conflicts,
    Coverage,
    Bloom,
    Competency,
    Groundedness,
    Faithfulness,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duplicates => "duplicates",
            Self::Claims => "claims",
            Self::Conflicts => "conflicts",
            Self::Coverage => "coverage",
            Self::Bloom => "bloom",
            Self::Competency => "competency",
            Self::Groundedness => "groundedness",
            Self::Faithfulness => "faithfulness",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory quality signals for one item, recomputed in full on every
/// create or edit and stored 1:1 against the item.
///
/// A pure function of the item's content and the sibling pool at the time of
/// computation: no timestamps, no randomness, list fields in a fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AutoCheckResult {
    pub item_id: String,
    /// Heuristic 0–5 confidence that the item is backed by its references.
    pub groundedness_score: u8,
    /// Heuristic 0–5 completeness of the item body.
    pub faithfulness_score: u8,
    pub reference_coverage: CoverageLevel,
    /// Identifiers of same-kind items similar enough to be likely duplicates.
    /// Sorted, never contains `item_id`.
    pub possible_duplicates: Vec<String>,
    /// Extracted numeric claims, in order of first occurrence.
    pub claims_with_numbers: Vec<String>,
    pub conflicts: Vec<NumericConflict>,
    pub bloom_level: BloomLevel,
    pub suggested_comps: Vec<CompetencyDomain>,
    /// blake3 hash of the content and references this result was computed from.
    pub content_hash: String,
    /// Sub-checks that failed and fell back to their safe default. Empty or
    /// `[duplicates]` with the current engine.
    #[serde(default)]
    pub degraded: Vec<CheckKind>,
}

impl AutoCheckResult {
    /// The conservative result every sub-check falls back to.
    pub fn neutral(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            groundedness_score: BASE_SCORE,
            faithfulness_score: BASE_SCORE,
            reference_coverage: CoverageLevel::Low,
            possible_duplicates: Vec::new(),
            claims_with_numbers: Vec::new(),
            conflicts: Vec::new(),
            bloom_level: BloomLevel::default(),
            suggested_comps: Vec::new(),
            content_hash: String::new(),
            degraded: Vec::new(),
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.possible_duplicates.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn is_low_coverage(&self) -> bool {
        self.reference_coverage == CoverageLevel::Low
    }

    /// True when at least one sub-check fell back to its default.
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    /// Whether this result was computed from exactly the given content hash.
    pub fn is_current_for(&self, content_hash: &str) -> bool {
        self.content_hash == content_hash
    }
}
