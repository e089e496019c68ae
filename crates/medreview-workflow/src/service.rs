//! The workflow handlers around the auto-checker.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use medreview_checks::AutoCheckEngine;
use medreview_core::config::{IntakeConfig, ReviewConfig};
use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{Item, ItemStatus};
use medreview_core::models::AutoCheckResult;
use medreview_core::traits::IItemRepository;
use medreview_observability::{DegradationTracker, TrackedDegradation};
use tracing::{debug, info, warn};

use crate::edit::ItemPatch;
use crate::intake::{validate_item, NewItem};
use crate::pool::RepositoryPool;
use crate::query::{queue, Analytics, ItemDetail, QueueFilter, QueueRow};
use crate::transition::ReviewAction;

/// Intake, edit, transitions, delete and the read side over one repository.
///
/// Every write of item content is followed by a full recompute of its
/// auto-check result, which replaces the stored one.
pub struct ReviewService<R: IItemRepository> {
    repo: R,
    checker: AutoCheckEngine,
    intake: IntakeConfig,
    degradation: Mutex<DegradationTracker>,
}

impl<R: IItemRepository> ReviewService<R> {
    pub fn new(repo: R, config: &ReviewConfig) -> ReviewResult<Self> {
        Ok(Self {
            repo,
            checker: AutoCheckEngine::new(config.checks.clone())?,
            intake: config.intake.clone(),
            degradation: Mutex::new(DegradationTracker::new()),
        })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn checker(&self) -> &AutoCheckEngine {
        &self.checker
    }

    /// Validate and store a new submission as `NeedsReview`, then compute
    /// its checks. If the checks cannot be stored the item is removed again,
    /// so a failed intake leaves nothing behind.
    pub fn intake(&self, submission: NewItem) -> ReviewResult<ItemDetail> {
        let span = medreview_observability::intake_span!(submission.content.kind());
        let _guard = span.enter();

        let mut item = submission.into_item();
        validate_item(&item, &self.intake, self.checker.extractor())?;
        item.status = ItemStatus::NeedsReview;

        self.repo.put(&item)?;
        let checks = match self.recompute(&item) {
            Ok(checks) => checks,
            Err(e) => {
                warn!(item_id = %item.id, error = %e, "storing checks failed, rolling back intake");
                if let Err(cleanup) = self.repo.delete(&item.id) {
                    warn!(item_id = %item.id, error = %cleanup, "rollback failed");
                }
                return Err(e);
            }
        };
        info!(item_id = %item.id, kind = %item.kind(), "item submitted");
        Ok(ItemDetail::new(item, Some(checks)))
    }

    /// Apply a patch, re-validate and replace the stored checks.
    pub fn edit(&self, id: &str, patch: ItemPatch) -> ReviewResult<ItemDetail> {
        let span = medreview_observability::edit_span!(id);
        let _guard = span.enter();

        if patch.is_empty() {
            return Err(ReviewError::validation("patch", "nothing to update"));
        }
        let current = self.require(id)?;
        let item = patch.apply(&current)?;
        validate_item(&item, &self.intake, self.checker.extractor())?;

        self.repo.put(&item)?;
        let checks = self.recompute(&item)?;
        info!(item_id = %item.id, "item edited");
        Ok(ItemDetail::new(item, Some(checks)))
    }

    /// Move an item through the review workflow. Checks are left untouched.
    pub fn transition(&self, id: &str, action: ReviewAction) -> ReviewResult<Item> {
        let span = medreview_observability::transition_span!(id, action.target());
        let _guard = span.enter();

        let mut item = self.require(id)?;
        let from = item.status;
        action.apply(&mut item)?;
        self.repo.put(&item)?;
        info!(item_id = %item.id, from = %from, to = %item.status, "status changed");
        Ok(item)
    }

    /// Remove an item together with its stored checks.
    pub fn delete(&self, id: &str) -> ReviewResult<()> {
        if !self.repo.delete(id)? {
            return Err(ReviewError::ItemNotFound { id: id.to_string() });
        }
        info!(item_id = %id, "item deleted");
        Ok(())
    }

    pub fn detail(&self, id: &str) -> ReviewResult<ItemDetail> {
        let item = self.require(id)?;
        let checks = self.repo.get_checks(id)?;
        Ok(ItemDetail::new(item, checks))
    }

    pub fn queue(&self, filter: &QueueFilter) -> ReviewResult<Vec<QueueRow>> {
        let rows = queue::build_queue(self.repo.list()?, self.repo.list_checks()?, filter);
        debug!(rows = rows.len(), "queue listed");
        Ok(rows)
    }

    pub fn analytics(&self) -> ReviewResult<Analytics> {
        let items = self.repo.list()?;
        let checks = self.repo.list_checks()?;
        Ok(Analytics::compute(&items, &checks, Utc::now()))
    }

    /// Sub-checks currently falling back to defaults.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker()
            .active_degradations()
            .into_iter()
            .cloned()
            .collect()
    }

    fn require(&self, id: &str) -> ReviewResult<Item> {
        self.repo
            .get(id)?
            .ok_or_else(|| ReviewError::ItemNotFound { id: id.to_string() })
    }

    fn recompute(&self, item: &Item) -> ReviewResult<AutoCheckResult> {
        let checks = self.checker.run(item, &RepositoryPool::new(&self.repo));
        self.repo.put_checks(&checks)?;
        self.tracker().observe(&checks);
        Ok(checks)
    }

    /// The tracker only holds an event log, so a panic elsewhere while it was
    /// locked leaves it usable.
    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradation.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("degradation tracker lock was poisoned, continuing with its state");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use medreview_core::item::FlashcardContent;
    use medreview_core::models::CheckKind;
    use medreview_core::{ItemContent, Reference};
    use medreview_storage::InMemoryRepository;

    use super::*;

    #[test]
    fn poisoned_tracker_keeps_recording() {
        let svc = ReviewService::new(InMemoryRepository::new(), &ReviewConfig::default()).unwrap();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = svc.degradation.lock().unwrap();
            panic!("handler crashed while holding the tracker");
        }));
        assert!(svc.degradation.is_poisoned());

        let mut degraded = AutoCheckResult::neutral("a");
        degraded.degraded = vec![CheckKind::Duplicates];
        svc.tracker().observe(&degraded);
        assert_eq!(svc.active_degradations().len(), 1);

        // Healthy runs through the service still close the event.
        svc.intake(NewItem::new(
            "Cardiology",
            "Vital signs",
            ItemContent::Flashcard(FlashcardContent {
                front: "Q".into(),
                back: "A".into(),
            }),
            vec![Reference::new("Guyton")],
        ))
        .unwrap();
        assert!(svc.active_degradations().is_empty());
    }
}
