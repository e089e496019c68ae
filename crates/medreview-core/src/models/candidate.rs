use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemContent, ItemKind};

/// A sibling item as seen by the duplicate detector: identifier and body only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub content: ItemContent,
}

impl Candidate {
    pub fn new(id: impl Into<String>, content: ItemContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }
}

impl From<&Item> for Candidate {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            content: item.content.clone(),
        }
    }
}
