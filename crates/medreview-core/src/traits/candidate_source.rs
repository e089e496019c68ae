use crate::errors::ReviewResult;
use crate::item::ItemKind;
use crate::models::Candidate;

/// Read-only snapshot of sibling items the duplicate detector compares against.
pub trait ICandidateSource: Send + Sync {
    /// All candidates of the given kind at call time.
    fn candidates(&self, kind: ItemKind) -> ReviewResult<Vec<Candidate>>;
}

/// A fixed pool, used by callers that already hold the siblings and by tests.
impl ICandidateSource for Vec<Candidate> {
    fn candidates(&self, kind: ItemKind) -> ReviewResult<Vec<Candidate>> {
        Ok(self.iter().filter(|c| c.kind() == kind).cloned().collect())
    }
}
