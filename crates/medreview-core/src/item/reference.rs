use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An evidence citation attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    /// Source or title of the cited work.
    #[serde(alias = "title")]
    pub source: String,
    /// Page locator. Only references with a page can back numeric claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Reference {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            page: None,
            url: None,
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether this reference carries a non-blank page locator.
    pub fn has_page(&self) -> bool {
        self.page.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}
