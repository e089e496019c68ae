use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ReviewError;

/// The two kinds of reviewable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Flashcard,
    Mcq,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Flashcard, ItemKind::Mcq];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flashcard => "FLASHCARD",
            Self::Mcq => "MCQ",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FLASHCARD" => Ok(Self::Flashcard),
            "MCQ" => Ok(Self::Mcq),
            other => Err(ReviewError::validation(
                "kind",
                format!("unknown item kind '{other}'"),
            )),
        }
    }
}

/// Kind-specific item body, resolved once at the boundary.
///
/// Serialized as an internally tagged enum (`"kind": "FLASHCARD" | "MCQ"`) so the
/// kind survives storage and transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemContent {
    Flashcard(FlashcardContent),
    Mcq(McqContent),
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Flashcard(_) => ItemKind::Flashcard,
            Self::Mcq(_) => ItemKind::Mcq,
        }
    }

    /// Plain-text projection used by every sub-check: all text fields joined
    /// with single spaces, empty fields skipped.
    pub fn plain_text(&self) -> String {
        let parts: Vec<&str> = match self {
            Self::Flashcard(card) => vec![card.front.as_str(), card.back.as_str()],
            Self::Mcq(mcq) => {
                let mut parts = Vec::with_capacity(mcq.options.len() + 2);
                parts.push(mcq.stem.as_str());
                parts.extend(mcq.options.iter().map(String::as_str));
                if let Some(explanation) = &mcq.explanation {
                    parts.push(explanation.as_str());
                }
                parts
            }
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct FlashcardContent {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct McqContent {
    pub stem: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
    pub explanation: Option<String>,
}

impl McqContent {
    /// Explanation text, empty when absent.
    pub fn explanation_text(&self) -> &str {
        self.explanation.as_deref().unwrap_or_default()
    }
}
