use medreview_core::models::BloomLevel;

use crate::text::normalize;

/// Map item text to a Bloom level.
///
/// Levels are scanned lowest first and the first level with any verb
/// occurring as a substring wins, so text mixing levels is classified at the
/// lowest one. Defaults to [`BloomLevel::Remember`].
pub fn classify_bloom(text: &str) -> BloomLevel {
    let normalized = normalize(text);
    BloomLevel::ALL
        .into_iter()
        .find(|level| level.verbs().iter().any(|verb| normalized.contains(verb)))
        .unwrap_or_default()
}
