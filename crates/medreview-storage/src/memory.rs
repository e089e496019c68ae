//! InMemoryRepository: concurrent item store via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{Item, ItemKind};
use medreview_core::models::AutoCheckResult;
use medreview_core::traits::IItemRepository;

/// Thread-safe repository holding items and their results in memory.
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<DashMap<String, Item>>,
    checks: Arc<DashMap<String, AutoCheckResult>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Oldest first, ties broken by id, matching the SQLite ordering.
fn sorted(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    items
}

impl IItemRepository for InMemoryRepository {
    fn get(&self, id: &str) -> ReviewResult<Option<Item>> {
        Ok(self.items.get(id).map(|r| r.clone()))
    }

    fn list(&self) -> ReviewResult<Vec<Item>> {
        Ok(sorted(self.items.iter().map(|r| r.value().clone()).collect()))
    }

    fn list_by_kind(&self, kind: ItemKind) -> ReviewResult<Vec<Item>> {
        Ok(sorted(
            self.items
                .iter()
                .filter(|r| r.kind() == kind)
                .map(|r| r.value().clone())
                .collect(),
        ))
    }

    fn put(&self, item: &Item) -> ReviewResult<()> {
        self.items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> ReviewResult<bool> {
        let existed = self.items.remove(id).is_some();
        self.checks.remove(id);
        Ok(existed)
    }

    fn get_checks(&self, item_id: &str) -> ReviewResult<Option<AutoCheckResult>> {
        Ok(self.checks.get(item_id).map(|r| r.clone()))
    }

    fn put_checks(&self, result: &AutoCheckResult) -> ReviewResult<()> {
        if !self.items.contains_key(&result.item_id) {
            return Err(ReviewError::ItemNotFound {
                id: result.item_id.clone(),
            });
        }
        self.checks.insert(result.item_id.clone(), result.clone());
        Ok(())
    }

    fn list_checks(&self) -> ReviewResult<Vec<AutoCheckResult>> {
        let mut results: Vec<AutoCheckResult> =
            self.checks.iter().map(|r| r.value().clone()).collect();
        results.sort_by(|a, b| a.item_id.cmp(&b.item_id));
        Ok(results)
    }
}
