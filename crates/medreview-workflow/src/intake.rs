//! Intake payloads and the submission rules shared with the edit handler.

use std::collections::HashSet;

use medreview_checks::ClaimExtractor;
use medreview_core::config::IntakeConfig;
use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{Item, ItemContent, Reference};
use serde::{Deserialize, Serialize};

/// A submission from a contributor, before it has an id or status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub subject: String,
    pub topic: String,
    pub content: ItemContent,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl NewItem {
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        content: ItemContent,
        references: Vec<Reference>,
    ) -> Self {
        Self {
            subject: subject.into(),
            topic: topic.into(),
            content,
            references,
        }
    }

    /// Trimmed copy as a fresh draft item.
    pub(crate) fn into_item(self) -> Item {
        Item::new(
            self.subject.trim(),
            self.topic.trim(),
            self.content,
            self.references,
        )
    }
}

/// Check an item against the submission rules.
///
/// Returns the first violation as `ReviewError::Validation` naming the field.
pub fn validate_item(
    item: &Item,
    rules: &IntakeConfig,
    extractor: &ClaimExtractor,
) -> ReviewResult<()> {
    require_text("subject", &item.subject)?;
    require_text("topic", &item.topic)?;
    validate_content(&item.content, rules)?;
    validate_references(&item.references)?;

    if rules.require_page_for_numeric_claims
        && !extractor.extract(&item.plain_text()).is_empty()
        && item.page_references().next().is_none()
    {
        return Err(ReviewError::validation(
            "references.page",
            "numeric claims need at least one reference with a page",
        ));
    }
    Ok(())
}

fn validate_content(content: &ItemContent, rules: &IntakeConfig) -> ReviewResult<()> {
    match content {
        ItemContent::Flashcard(card) => {
            require_text("front", &card.front)?;
            require_text("back", &card.back)?;
        }
        ItemContent::Mcq(mcq) => {
            require_text("stem", &mcq.stem)?;
            if mcq.options.len() < rules.min_mcq_options {
                return Err(ReviewError::validation(
                    "options",
                    format!(
                        "at least {} options required, got {}",
                        rules.min_mcq_options,
                        mcq.options.len()
                    ),
                ));
            }
            let mut seen = HashSet::with_capacity(mcq.options.len());
            for option in &mcq.options {
                let key = option.trim().to_lowercase();
                if key.is_empty() {
                    return Err(ReviewError::validation("options", "options must not be empty"));
                }
                if !seen.insert(key) {
                    return Err(ReviewError::validation(
                        "options",
                        format!("duplicate option '{}'", option.trim()),
                    ));
                }
            }
            if mcq.correct_index >= mcq.options.len() {
                return Err(ReviewError::validation(
                    "correctIndex",
                    format!(
                        "{} is out of range for {} options",
                        mcq.correct_index,
                        mcq.options.len()
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn validate_references(references: &[Reference]) -> ReviewResult<()> {
    if references.is_empty() {
        return Err(ReviewError::validation(
            "references",
            "at least one reference is required",
        ));
    }
    for reference in references {
        require_text("references.source", &reference.source)?;
        if let Some(url) = reference.url.as_deref() {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ReviewError::validation(
                    "references.url",
                    format!("'{url}' is not an http(s) URL"),
                ));
            }
        }
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> ReviewResult<()> {
    if value.trim().is_empty() {
        return Err(ReviewError::validation(field, "must not be empty"));
    }
    Ok(())
}
