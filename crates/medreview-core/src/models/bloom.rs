use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Cognitive level from Bloom's taxonomy, lowest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    #[default]
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomLevel {
    /// Declaration order. Classification scans levels in this order.
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    /// The closed verb vocabulary for this level.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            Self::Remember => &["list", "identify", "name", "state", "define", "recall"],
            Self::Understand => &["explain", "describe", "interpret", "summarize", "classify"],
            Self::Apply => &["demonstrate", "calculate", "solve", "use", "implement"],
            Self::Analyze => &["compare", "contrast", "differentiate", "examine", "analyze"],
            Self::Evaluate => &["assess", "critique", "judge", "evaluate", "justify"],
            Self::Create => &["design", "construct", "create", "develop", "formulate"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remember => "remember",
            Self::Understand => "understand",
            Self::Apply => "apply",
            Self::Analyze => "analyze",
            Self::Evaluate => "evaluate",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
