use medreview_core::models::CompetencyDomain;

use crate::text::normalize;

/// Suggest every competency domain whose keywords occur in the subject,
/// topic or body. Falls back to `default` when nothing matches.
pub fn suggest_competencies(
    subject: &str,
    topic: &str,
    body: &str,
    default: CompetencyDomain,
) -> Vec<CompetencyDomain> {
    let normalized = normalize(&format!("{subject} {topic} {body}"));
    let matched: Vec<CompetencyDomain> = CompetencyDomain::ALL
        .into_iter()
        .filter(|domain| domain.keywords().iter().any(|k| normalized.contains(k)))
        .collect();

    if matched.is_empty() {
        vec![default]
    } else {
        matched
    }
}
