//! Record every degradation event with its recovery status.

use chrono::{DateTime, Duration, Utc};
use medreview_core::models::{AutoCheckResult, CheckKind, DegradationEvent};
use serde::{Deserialize, Serialize};

use crate::tracing_setup::events;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still falling back to defaults.
    Active,
    Recovered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Prefix of every component fed by [`DegradationTracker::observe`].
pub const AUTOCHECK_COMPONENT_PREFIX: &str = "autocheck.";

/// Recovered events are kept this long before they are pruned.
pub const RECOVERED_RETENTION_SECS: i64 = 24 * 60 * 60;

/// Upper bound on retained events. Active events are never dropped.
pub const MAX_TRACKED_EVENTS: usize = 256;

/// Component name under which a sub-check's degradations are tracked.
pub fn component_name(check: CheckKind) -> String {
    format!("{AUTOCHECK_COMPONENT_PREFIX}{}", check.as_str())
}

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        self.prune_recovered_before(Utc::now() - Duration::seconds(RECOVERED_RETENTION_SECS));
    }

    /// Mark every active degradation of `component` as recovered.
    pub fn mark_recovered(&mut self, component: &str) {
        let now = Utc::now();
        let mut recovered = false;
        for tracked in self.events.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            recovered = true;
        }
        if recovered {
            events::degradation_recovered(component);
        }
    }

    /// Fold one auto-check run in: a degraded sub-check opens an event unless
    /// one is already active, an active auto-check component the run did not
    /// list is closed.
    pub fn observe(&mut self, result: &AutoCheckResult) {
        let failing: Vec<String> = result.degraded.iter().map(|c| component_name(*c)).collect();

        for (check, component) in result.degraded.iter().zip(&failing) {
            if !self.is_degraded(component) {
                self.record(DegradationEvent {
                    component: component.clone(),
                    failure: format!("{check} sub-check failed for item {}", result.item_id),
                    fallback_used: "neutral default".to_string(),
                    timestamp: Utc::now(),
                });
            }
        }

        let mut healed: Vec<String> = self
            .active_degradations()
            .into_iter()
            .map(|t| t.event.component.clone())
            .filter(|c| c.starts_with(AUTOCHECK_COMPONENT_PREFIX) && !failing.contains(c))
            .collect();
        healed.sort();
        healed.dedup();
        for component in healed {
            self.mark_recovered(&component);
        }
    }

    /// Drop recovered events that recovered before `cutoff`, then the oldest
    /// recovered ones while more than [`MAX_TRACKED_EVENTS`] remain.
    pub fn prune_recovered_before(&mut self, cutoff: DateTime<Utc>) {
        self.events.retain(|t| match t.recovered_at {
            Some(at) => at >= cutoff,
            None => true,
        });

        let mut excess = self.events.len().saturating_sub(MAX_TRACKED_EVENTS);
        if excess > 0 {
            self.events.retain(|t| {
                if excess > 0 && t.recovery_status == RecoveryStatus::Recovered {
                    excess -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    /// Events for `component` in the last `window_secs` seconds.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }
}
