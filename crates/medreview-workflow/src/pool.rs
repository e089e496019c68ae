//! Candidate pool backed by the item repository.

use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::ItemKind;
use medreview_core::models::Candidate;
use medreview_core::traits::{ICandidateSource, IItemRepository};

/// Same-kind siblings read straight from the repository at call time.
///
/// Repository failures surface as `CandidatePoolUnavailable`, which the
/// checker degrades to an empty duplicate list.
pub struct RepositoryPool<'a, R: IItemRepository> {
    repo: &'a R,
}

impl<'a, R: IItemRepository> RepositoryPool<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }
}

impl<R: IItemRepository> ICandidateSource for RepositoryPool<'_, R> {
    fn candidates(&self, kind: ItemKind) -> ReviewResult<Vec<Candidate>> {
        let items = self
            .repo
            .list_by_kind(kind)
            .map_err(|e| ReviewError::CandidatePoolUnavailable {
                reason: e.to_string(),
            })?;
        Ok(items.iter().map(Candidate::from).collect())
    }
}
