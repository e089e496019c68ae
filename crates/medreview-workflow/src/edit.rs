//! Partial updates to an existing item.

use chrono::Utc;
use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{Item, ItemContent, Reference};
use serde::{Deserialize, Serialize};

/// Fields to replace on an item. `None` leaves the field unchanged; the
/// content variant must match the item's kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemPatch {
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub content: Option<ItemContent>,
    pub references: Option<Vec<Reference>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.topic.is_none()
            && self.content.is_none()
            && self.references.is_none()
    }

    /// Apply to a copy of `item`, bumping `updated_at`.
    pub fn apply(self, item: &Item) -> ReviewResult<Item> {
        let mut updated = item.clone();
        if let Some(content) = self.content {
            if content.kind() != item.kind() {
                return Err(ReviewError::validation(
                    "content",
                    format!("cannot change kind from {} to {}", item.kind(), content.kind()),
                ));
            }
            updated.content = content;
        }
        if let Some(subject) = self.subject {
            updated.subject = subject.trim().to_string();
        }
        if let Some(topic) = self.topic {
            updated.topic = topic.trim().to_string();
        }
        if let Some(references) = self.references {
            updated.references = references;
        }
        updated.updated_at = Utc::now();
        Ok(updated)
    }
}
