use medreview_core::item::Item;
use medreview_core::models::AutoCheckResult;
use serde::Serialize;
use ts_rs::TS;

/// An item with its stored auto-check result.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub item: Item,
    pub checks: Option<AutoCheckResult>,
    /// The stored result was computed from different content than the item
    /// now has.
    pub stale: bool,
    /// At least one sub-check fell back to its default.
    pub checks_degraded: bool,
}

impl ItemDetail {
    pub fn new(item: Item, checks: Option<AutoCheckResult>) -> Self {
        let stale = match (&checks, item.content_hash()) {
            (Some(result), Ok(hash)) => !result.is_current_for(&hash),
            _ => false,
        };
        let checks_degraded = checks.as_ref().is_some_and(AutoCheckResult::is_degraded);
        Self {
            item,
            checks,
            stale,
            checks_degraded,
        }
    }
}
