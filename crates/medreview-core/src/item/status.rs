use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ReviewError;

/// Review lifecycle of an item.
///
/// `Draft → NeedsReview → ChangesRequested | Published`, with
/// `ChangesRequested` returning to `NeedsReview` (or publishing directly)
/// once the contributor has addressed the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Draft,
    NeedsReview,
    ChangesRequested,
    Published,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Draft,
        ItemStatus::NeedsReview,
        ItemStatus::ChangesRequested,
        ItemStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::NeedsReview => "NEEDS_REVIEW",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::Published => "PUBLISHED",
        }
    }

    /// Whether the workflow allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::NeedsReview)
                | (Self::NeedsReview, Self::ChangesRequested)
                | (Self::NeedsReview, Self::Published)
                | (Self::ChangesRequested, Self::NeedsReview)
                | (Self::ChangesRequested, Self::Published)
        )
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ReviewError::validation("status", format!("unknown status '{s}'")))
    }
}
