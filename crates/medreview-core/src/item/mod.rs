//! The reviewable unit of content and its evidence citations.

mod content;
mod reference;
mod status;

pub use content::{FlashcardContent, ItemContent, ItemKind, McqContent};
pub use reference::Reference;
pub use status::ItemStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A flashcard or multiple-choice question submitted for review.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// UUID v4 identifier.
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub status: ItemStatus,
    /// Kind-specific body. The kind of the item is the variant of this field.
    pub content: ItemContent,
    /// Evidence citations, in submission order.
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Note left by a reviewer when requesting changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new draft item with a fresh identifier.
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        content: ItemContent,
        references: Vec<Reference>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            subject: subject.into(),
            topic: topic.into(),
            status: ItemStatus::Draft,
            content,
            references,
            reviewer_note: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// All text fields of the body joined with single spaces.
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// References that carry a page locator and can therefore back numeric claims.
    pub fn page_references(&self) -> impl Iterator<Item = &Reference> {
        self.references.iter().filter(|r| r.has_page())
    }

    /// blake3 hash over the content and references, the inputs an auto-check
    /// result is derived from (besides the sibling pool).
    pub fn content_hash(&self) -> crate::errors::ReviewResult<String> {
        let serialized = serde_json::to_string(&(&self.content, &self.references))?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }
}

/// Identity equality: two items are equal if they have the same ID.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
