use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Subject domain an item can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CompetencyDomain {
    Anatomy,
    Physiology,
    Pathology,
}

impl CompetencyDomain {
    pub const ALL: [CompetencyDomain; 3] = [
        CompetencyDomain::Anatomy,
        CompetencyDomain::Physiology,
        CompetencyDomain::Pathology,
    ];

    /// Keywords whose presence suggests this domain.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Anatomy => &[
                "structure",
                "anatomical",
                "organ",
                "tissue",
                "system",
                "bone",
                "muscle",
            ],
            Self::Physiology => &[
                "function",
                "process",
                "mechanism",
                "regulation",
                "homeostasis",
                "metabolism",
            ],
            Self::Pathology => &[
                "disease",
                "disorder",
                "pathology",
                "abnormal",
                "dysfunction",
                "infection",
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anatomy => "anatomy",
            Self::Physiology => "physiology",
            Self::Pathology => "pathology",
        }
    }
}

impl fmt::Display for CompetencyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
