use medreview_core::config::NoClaimsCoverage;
use medreview_core::item::Reference;
use medreview_core::models::CoverageLevel;

/// Grade how well page-cited references back `claim_count` numeric claims.
///
/// With claims: no page references is low, fewer page references than claims
/// is medium, otherwise high. Without claims the configured policy applies.
pub fn score_coverage(
    claim_count: usize,
    references: &[Reference],
    no_claims: NoClaimsCoverage,
) -> CoverageLevel {
    if claim_count == 0 {
        return match no_claims {
            NoClaimsCoverage::Vacuous => CoverageLevel::High,
            NoClaimsCoverage::ReferenceCount => match references.len() {
                0 => CoverageLevel::Low,
                1 => CoverageLevel::Medium,
                _ => CoverageLevel::High,
            },
        };
    }

    let paged = references.iter().filter(|r| r.has_page()).count();
    if paged == 0 {
        CoverageLevel::Low
    } else if paged < claim_count {
        CoverageLevel::Medium
    } else {
        CoverageLevel::High
    }
}
