use crate::errors::ReviewResult;
use crate::item::{Item, ItemKind};
use crate::models::AutoCheckResult;

/// Persistence for items and their auto-check results.
///
/// Injected into the workflow handlers; the checker itself never touches it.
pub trait IItemRepository: Send + Sync {
    // --- Items ---
    fn get(&self, id: &str) -> ReviewResult<Option<Item>>;
    fn list(&self) -> ReviewResult<Vec<Item>>;
    fn list_by_kind(&self, kind: ItemKind) -> ReviewResult<Vec<Item>>;
    /// Insert or fully replace an item.
    fn put(&self, item: &Item) -> ReviewResult<()>;
    /// Delete an item and its auto-check result. Returns whether it existed.
    fn delete(&self, id: &str) -> ReviewResult<bool>;

    // --- Auto-check results ---
    fn get_checks(&self, item_id: &str) -> ReviewResult<Option<AutoCheckResult>>;
    /// Replace the stored result for `result.item_id`. The item must exist.
    fn put_checks(&self, result: &AutoCheckResult) -> ReviewResult<()>;
    fn list_checks(&self) -> ReviewResult<Vec<AutoCheckResult>>;
}
