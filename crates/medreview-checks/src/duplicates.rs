//! Near-duplicate search over the same-kind sibling pool.

use std::collections::BTreeSet;

use medreview_core::models::Candidate;
use rayon::prelude::*;

use crate::text::{normalize, similarity};

/// Identifiers of candidates whose normalized text scores at or above
/// `threshold` against `target_text`.
///
/// Sorted and de-duplicated. Does not exclude the target itself; callers that
/// pass a pool containing the target filter by id. An item whose normalized
/// text is empty never matches anything.
pub fn find_duplicates(target_text: &str, pool: &[Candidate], threshold: f64) -> Vec<String> {
    let target = normalize(target_text);
    if target.is_empty() {
        return Vec::new();
    }

    pool.par_iter()
        .filter_map(|candidate| {
            let other = normalize(&candidate.content.plain_text());
            if other.is_empty() {
                return None;
            }
            (similarity(&target, &other) >= threshold).then(|| candidate.id.clone())
        })
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
