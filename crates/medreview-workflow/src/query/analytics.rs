//! Aggregate counts over all items and their stored results.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};
use medreview_core::constants::{THROUGHPUT_WINDOW_DAYS, TOP_SUBJECTS};
use medreview_core::item::{Item, ItemKind, ItemStatus};
use medreview_core::models::AutoCheckResult;
use serde::Serialize;
use ts_rs::TS;

const UNASSIGNED_SUBJECT: &str = "Unassigned";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusTotals {
    pub total: usize,
    pub draft: usize,
    pub needs_review: usize,
    pub changes_requested: usize,
    pub published: usize,
}

impl StatusTotals {
    fn add(&mut self, status: ItemStatus) {
        self.total += 1;
        match status {
            ItemStatus::Draft => self.draft += 1,
            ItemStatus::NeedsReview => self.needs_review += 1,
            ItemStatus::ChangesRequested => self.changes_requested += 1,
            ItemStatus::Published => self.published += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct KindCount {
    pub kind: ItemKind,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SubjectCount {
    pub subject: String,
    pub count: usize,
}

/// Items carrying each quality signal. Items without a stored result count
/// toward none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QualityCounts {
    pub duplicates: usize,
    pub conflicts: usize,
    pub low_coverage: usize,
    /// Results where a sub-check fell back to its default.
    pub degraded: usize,
}

/// Workflow movement over the trailing window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Throughput {
    pub window_days: i64,
    /// Created in the window and not yet decided.
    pub submitted: usize,
    pub published: usize,
    pub changes_requested: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub totals: StatusTotals,
    /// One entry per kind, zero counts included.
    pub kind_distribution: Vec<KindCount>,
    pub top_subjects: Vec<SubjectCount>,
    pub quality: QualityCounts,
    pub throughput: Throughput,
}

impl Analytics {
    /// Aggregate `items` with their stored `checks` as of `now`.
    pub fn compute(items: &[Item], checks: &[AutoCheckResult], now: DateTime<Utc>) -> Self {
        let by_item: HashMap<&str, &AutoCheckResult> =
            checks.iter().map(|c| (c.item_id.as_str(), c)).collect();

        let mut totals = StatusTotals::default();
        let mut kinds: HashMap<ItemKind, usize> = HashMap::new();
        let mut subjects: BTreeMap<String, usize> = BTreeMap::new();
        let mut quality = QualityCounts::default();

        let since = now - Duration::days(THROUGHPUT_WINDOW_DAYS);
        let mut throughput = Throughput {
            window_days: THROUGHPUT_WINDOW_DAYS,
            ..Throughput::default()
        };

        for item in items {
            totals.add(item.status);
            *kinds.entry(item.kind()).or_default() += 1;

            let subject = match item.subject.trim() {
                "" => UNASSIGNED_SUBJECT,
                s => s,
            };
            *subjects.entry(subject.to_string()).or_default() += 1;

            if let Some(result) = by_item.get(item.id.as_str()) {
                quality.duplicates += usize::from(result.has_duplicates());
                quality.conflicts += usize::from(result.has_conflicts());
                quality.low_coverage += usize::from(result.is_low_coverage());
                quality.degraded += usize::from(result.is_degraded());
            }

            match item.status {
                ItemStatus::Draft | ItemStatus::NeedsReview if item.created_at >= since => {
                    throughput.submitted += 1;
                }
                ItemStatus::Published if item.updated_at >= since => {
                    throughput.published += 1;
                }
                ItemStatus::ChangesRequested if item.updated_at >= since => {
                    throughput.changes_requested += 1;
                }
                _ => {}
            }
        }

        let kind_distribution = ItemKind::ALL
            .into_iter()
            .map(|kind| KindCount {
                kind,
                count: kinds.get(&kind).copied().unwrap_or(0),
            })
            .collect();

        // BTreeMap iteration is name-ordered, so the stable sort keeps ties alphabetical.
        let mut top_subjects: Vec<SubjectCount> = subjects
            .into_iter()
            .map(|(subject, count)| SubjectCount { subject, count })
            .collect();
        top_subjects.sort_by(|a, b| b.count.cmp(&a.count));
        top_subjects.truncate(TOP_SUBJECTS);

        Self {
            totals,
            kind_distribution,
            top_subjects,
            quality,
            throughput,
        }
    }
}
