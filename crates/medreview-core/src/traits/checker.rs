use crate::item::Item;
use crate::models::AutoCheckResult;
use crate::traits::ICandidateSource;

/// Computes the advisory auto-check record for an item.
pub trait IAutoChecker: Send + Sync {
    /// Run every sub-check for `item` against the sibling `pool`.
    ///
    /// Infallible by contract: a failing sub-check degrades to its safe
    /// default and is listed in [`AutoCheckResult::degraded`].
    fn run(&self, item: &Item, pool: &dyn ICandidateSource) -> AutoCheckResult;
}
