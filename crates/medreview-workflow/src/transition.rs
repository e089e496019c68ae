//! Reviewer actions and the status each one leads to.

use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{Item, ItemStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReviewAction {
    /// Send a draft to the review queue.
    Submit,
    /// Return to the contributor with a note.
    RequestChanges { note: String },
    Publish,
    /// Contributor sends a revised item back for review.
    Resubmit,
}

impl ReviewAction {
    pub fn target(&self) -> ItemStatus {
        match self {
            Self::Submit | Self::Resubmit => ItemStatus::NeedsReview,
            Self::RequestChanges { .. } => ItemStatus::ChangesRequested,
            Self::Publish => ItemStatus::Published,
        }
    }

    /// Move `item` to this action's target status.
    ///
    /// Request-changes stores its note on the item; publishing clears it.
    pub fn apply(&self, item: &mut Item) -> ReviewResult<()> {
        let to = self.target();
        let allowed = item.status.can_transition_to(to)
            && match self {
                Self::Submit => item.status == ItemStatus::Draft,
                Self::Resubmit => item.status == ItemStatus::ChangesRequested,
                _ => true,
            };
        if !allowed {
            return Err(ReviewError::InvalidTransition {
                from: item.status.to_string(),
                to: to.to_string(),
            });
        }

        match self {
            Self::RequestChanges { note } => {
                let note = note.trim();
                if note.is_empty() {
                    return Err(ReviewError::validation(
                        "note",
                        "a note is required when requesting changes",
                    ));
                }
                item.reviewer_note = Some(note.to_string());
            }
            Self::Publish => item.reviewer_note = None,
            Self::Submit | Self::Resubmit => {}
        }
        item.status = to;
        item.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use medreview_core::item::{FlashcardContent, ItemContent};

    use super::*;

    fn item(status: ItemStatus) -> Item {
        let mut item = Item::new(
            "Anatomy",
            "Skull",
            ItemContent::Flashcard(FlashcardContent::default()),
            vec![],
        );
        item.status = status;
        item
    }

    #[test]
    fn request_changes_then_resubmit_then_publish() {
        let mut it = item(ItemStatus::NeedsReview);
        ReviewAction::RequestChanges {
            note: " cite a page ".into(),
        }
        .apply(&mut it)
        .unwrap();
        assert_eq!(it.status, ItemStatus::ChangesRequested);
        assert_eq!(it.reviewer_note.as_deref(), Some("cite a page"));

        ReviewAction::Resubmit.apply(&mut it).unwrap();
        assert_eq!(it.status, ItemStatus::NeedsReview);
        assert!(it.reviewer_note.is_some());

        ReviewAction::Publish.apply(&mut it).unwrap();
        assert_eq!(it.status, ItemStatus::Published);
        assert!(it.reviewer_note.is_none());
    }

    #[test]
    fn published_is_terminal() {
        for action in [
            ReviewAction::Submit,
            ReviewAction::Resubmit,
            ReviewAction::Publish,
            ReviewAction::RequestChanges { note: "x".into() },
        ] {
            let mut it = item(ItemStatus::Published);
            assert!(matches!(
                action.apply(&mut it),
                Err(ReviewError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn blank_note_is_rejected_without_changing_status() {
        let mut it = item(ItemStatus::NeedsReview);
        let err = ReviewAction::RequestChanges { note: "  ".into() }
            .apply(&mut it)
            .unwrap_err();
        assert!(matches!(err, ReviewError::Validation { .. }));
        assert_eq!(it.status, ItemStatus::NeedsReview);
    }

    #[test]
    fn submit_only_from_draft() {
        let mut draft = item(ItemStatus::Draft);
        ReviewAction::Submit.apply(&mut draft).unwrap();
        assert_eq!(draft.status, ItemStatus::NeedsReview);

        let mut changes = item(ItemStatus::ChangesRequested);
        assert!(ReviewAction::Submit.apply(&mut changes).is_err());
    }
}
