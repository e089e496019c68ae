//! Review queue listing with filters.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use medreview_core::constants::DEFAULT_QUEUE_LIMIT;
use medreview_core::errors::ReviewError;
use medreview_core::item::{Item, ItemContent, ItemKind, ItemStatus};
use medreview_core::models::AutoCheckResult;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper bound on rows returned by one listing.
pub const MAX_QUEUE_LIMIT: usize = 100;

const HEADLINE_CHARS: usize = 80;

/// Quality signal a queue listing can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QualityFlag {
    Duplicates,
    Conflicts,
    LowCoverage,
    /// Any of the above.
    Quality,
}

impl QualityFlag {
    pub fn matches(self, checks: &AutoCheckResult) -> bool {
        match self {
            Self::Duplicates => checks.has_duplicates(),
            Self::Conflicts => checks.has_conflicts(),
            Self::LowCoverage => checks.is_low_coverage(),
            Self::Quality => {
                checks.has_duplicates() || checks.has_conflicts() || checks.is_low_coverage()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duplicates => "duplicates",
            Self::Conflicts => "conflicts",
            Self::LowCoverage => "low_coverage",
            Self::Quality => "quality",
        }
    }
}

impl fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityFlag {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duplicates" | "duplicate" => Ok(Self::Duplicates),
            "conflicts" | "conflict" => Ok(Self::Conflicts),
            "low_coverage" | "lowcoverage" => Ok(Self::LowCoverage),
            "quality" => Ok(Self::Quality),
            other => Err(ReviewError::validation(
                "flag",
                format!("unknown quality flag '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueFilter {
    /// Case-insensitive substring of the subject.
    pub subject: Option<String>,
    pub kind: Option<ItemKind>,
    pub status: Option<ItemStatus>,
    pub flag: Option<QualityFlag>,
    /// Defaults to 50, capped at 100.
    pub limit: Option<usize>,
}

impl QueueFilter {
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_QUEUE_LIMIT)
            .clamp(1, MAX_QUEUE_LIMIT)
    }

    fn accepts(&self, item: &Item, checks: Option<&AutoCheckResult>) -> bool {
        if let Some(subject) = self.subject.as_deref() {
            let needle = subject.trim().to_lowercase();
            if !needle.is_empty() && !item.subject.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.kind.is_some_and(|kind| item.kind() != kind) {
            return false;
        }
        if self.status.is_some_and(|status| item.status != status) {
            return false;
        }
        match self.flag {
            // Items without a stored result carry no flags.
            Some(flag) => checks.is_some_and(|c| flag.matches(c)),
            None => true,
        }
    }
}

/// One line of the review queue.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QueueRow {
    pub id: String,
    pub kind: ItemKind,
    pub subject: String,
    pub topic: String,
    pub status: ItemStatus,
    /// Flashcard front or MCQ stem, shortened.
    pub headline: String,
    pub reference_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub checks: Option<AutoCheckResult>,
}

impl QueueRow {
    fn new(item: Item, checks: Option<AutoCheckResult>) -> Self {
        let lead = match &item.content {
            ItemContent::Flashcard(card) => card.front.trim(),
            ItemContent::Mcq(mcq) => mcq.stem.trim(),
        };
        let headline = if lead.chars().count() > HEADLINE_CHARS {
            let cut: String = lead.chars().take(HEADLINE_CHARS).collect();
            format!("{}…", cut.trim_end())
        } else {
            lead.to_string()
        };
        Self {
            kind: item.kind(),
            headline,
            reference_count: item.references.len(),
            id: item.id,
            subject: item.subject,
            topic: item.topic,
            status: item.status,
            created_at: item.created_at,
            updated_at: item.updated_at,
            checks,
        }
    }
}

/// Filter, order newest first and truncate.
pub fn build_queue(
    items: Vec<Item>,
    checks: Vec<AutoCheckResult>,
    filter: &QueueFilter,
) -> Vec<QueueRow> {
    let mut by_item: HashMap<String, AutoCheckResult> = checks
        .into_iter()
        .map(|c| (c.item_id.clone(), c))
        .collect();

    let mut selected: Vec<Item> = items
        .into_iter()
        .filter(|item| filter.accepts(item, by_item.get(&item.id)))
        .collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    selected.truncate(filter.effective_limit());

    selected
        .into_iter()
        .map(|item| {
            let checks = by_item.remove(&item.id);
            QueueRow::new(item, checks)
        })
        .collect()
}
