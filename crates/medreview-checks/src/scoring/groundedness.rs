use medreview_core::constants::{BASE_SCORE, MAX_SCORE};
use medreview_core::item::Reference;

/// 0–5 confidence that an item is backed by its references.
pub fn score_groundedness(references: &[Reference]) -> u8 {
    let mut score = BASE_SCORE;
    if !references.is_empty() {
        score += 1;
    }
    if references.len() > 2 {
        score += 1;
    }
    if references.iter().any(Reference::has_page) {
        score += 1;
    }
    score.min(MAX_SCORE)
}
