use medreview_core::models::NumericConflict;

/// A claim with its digits and decimal points removed, e.g. `60-100 bpm` → `- bpm`.
pub fn claim_shape(claim: &str) -> String {
    claim
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect()
}

/// Pairs of distinct claims that share a shape but differ in value.
///
/// Coarse by intent: it surfaces candidate self-contradictions such as
/// `60-100 bpm` vs `70-110 bpm` for a reviewer. Bare numbers share the
/// empty shape, so any two different ones pair up.
pub fn find_conflicts(claims: &[String]) -> Vec<NumericConflict> {
    let mut distinct: Vec<&str> = Vec::with_capacity(claims.len());
    for claim in claims {
        if !distinct.contains(&claim.as_str()) {
            distinct.push(claim);
        }
    }

    let shaped: Vec<(&str, String)> = distinct
        .into_iter()
        .map(|claim| (claim, claim_shape(claim)))
        .collect();

    let mut conflicts = Vec::new();
    for (i, (first, shape_a)) in shaped.iter().enumerate() {
        for (second, shape_b) in &shaped[i + 1..] {
            if shape_a == shape_b {
                conflicts.push(NumericConflict {
                    first: first.to_string(),
                    second: second.to_string(),
                    shape: shape_a.clone(),
                });
            }
        }
    }
    conflicts
}
