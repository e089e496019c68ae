//! AutoCheckEngine: runs every sub-check for an item and assembles the
//! advisory result. Implements [`IAutoChecker`].

use medreview_core::config::ChecksConfig;
use medreview_core::errors::ReviewResult;
use medreview_core::item::Item;
use medreview_core::models::{
    AutoCheckResult, BloomLevel, Candidate, CheckKind, CompetencyDomain, CoverageLevel,
    NumericConflict,
};
use medreview_core::traits::{IAutoChecker, ICandidateSource};
use tracing::{debug, info, warn};

use crate::claims::{find_conflicts, ClaimExtractor};
use crate::classify::{classify_bloom, suggest_competencies};
use crate::duplicates::find_duplicates;
use crate::scoring::{score_coverage, score_faithfulness, score_groundedness};

struct ClaimFindings {
    claims: Vec<String>,
    conflicts: Vec<NumericConflict>,
    coverage: CoverageLevel,
}

struct Tags {
    bloom: BloomLevel,
    competencies: Vec<CompetencyDomain>,
    groundedness: u8,
    faithfulness: u8,
}

/// Orchestrates the independent sub-checks.
///
/// Duplicates, claim analysis and tagging share no data and run on the rayon
/// pool when `parallel` is set. The run never fails: a sub-check that errors
/// falls back to its neutral value and is listed in `degraded`.
#[derive(Debug, Clone)]
pub struct AutoCheckEngine {
    config: ChecksConfig,
    extractor: ClaimExtractor,
}

impl AutoCheckEngine {
    pub fn new(config: ChecksConfig) -> ReviewResult<Self> {
        config.validate()?;
        let extractor = ClaimExtractor::from_config(&config)?;
        Ok(Self { config, extractor })
    }

    pub fn with_defaults() -> ReviewResult<Self> {
        Self::new(ChecksConfig::default())
    }

    pub fn config(&self) -> &ChecksConfig {
        &self.config
    }

    /// The claim extractor this engine was configured with.
    pub fn extractor(&self) -> &ClaimExtractor {
        &self.extractor
    }

    /// Compute the auto-check result for `item` against a snapshot of `pool`.
    pub fn run(&self, item: &Item, pool: &dyn ICandidateSource) -> AutoCheckResult {
        let span = medreview_observability::autocheck_span!(item.id);
        let _guard = span.enter();

        let mut result = AutoCheckResult::neutral(item.id.clone());
        let body = item.plain_text();

        // The pool is read once; the scan works on this snapshot.
        let siblings = pool.candidates(item.kind());

        let (duplicates, (findings, tags)) = self.fork(
            || siblings.map(|snapshot| self.check_duplicates(item, &body, snapshot)),
            || {
                self.fork(
                    || self.check_claims(item, &body),
                    || self.check_tags(item, &body),
                )
            },
        );

        result.possible_duplicates =
            settle(CheckKind::Duplicates, &item.id, duplicates, &mut result.degraded);
        result.claims_with_numbers = findings.claims;
        result.conflicts = findings.conflicts;
        result.reference_coverage = findings.coverage;
        result.bloom_level = tags.bloom;
        result.suggested_comps = tags.competencies;
        result.groundedness_score = tags.groundedness;
        result.faithfulness_score = tags.faithfulness;
        result.content_hash = match item.content_hash() {
            Ok(hash) => hash,
            Err(e) => {
                warn!(item_id = %item.id, error = %e, "content hash unavailable");
                String::new()
            }
        };

        info!(
            item_id = %item.id,
            duplicates = result.possible_duplicates.len(),
            claims = result.claims_with_numbers.len(),
            conflicts = result.conflicts.len(),
            coverage = %result.reference_coverage,
            bloom = %result.bloom_level,
            degraded = result.degraded.len(),
            "auto-check complete"
        );
        result
    }

    fn check_duplicates(&self, item: &Item, body: &str, snapshot: Vec<Candidate>) -> Vec<String> {
        let kind = item.kind();
        let siblings: Vec<Candidate> = snapshot
            .into_iter()
            .filter(|c| c.id != item.id && c.kind() == kind)
            .collect();
        let hits = find_duplicates(body, &siblings, self.config.duplicate_threshold);
        debug!(check = "duplicates", pool = siblings.len(), hits = hits.len());
        hits
    }

    fn check_claims(&self, item: &Item, body: &str) -> ClaimFindings {
        let claims = self.extractor.extract(body);
        let conflicts = find_conflicts(&claims);
        let coverage = score_coverage(
            claims.len(),
            &item.references,
            self.config.no_claims_coverage,
        );
        debug!(
            check = "claims",
            claims = claims.len(),
            conflicts = conflicts.len(),
            coverage = %coverage
        );
        ClaimFindings {
            claims,
            conflicts,
            coverage,
        }
    }

    fn check_tags(&self, item: &Item, body: &str) -> Tags {
        let tags = Tags {
            bloom: classify_bloom(body),
            competencies: suggest_competencies(
                &item.subject,
                &item.topic,
                body,
                self.config.default_competency,
            ),
            groundedness: score_groundedness(&item.references),
            faithfulness: score_faithfulness(&item.content),
        };
        debug!(check = "tags", bloom = %tags.bloom, comps = tags.competencies.len());
        tags
    }

    fn fork<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.config.parallel {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }
}

impl IAutoChecker for AutoCheckEngine {
    fn run(&self, item: &Item, pool: &dyn ICandidateSource) -> AutoCheckResult {
        AutoCheckEngine::run(self, item, pool)
    }
}

/// Unwrap a sub-check outcome, falling back to the default and recording the
/// degradation on error.
fn settle<T: Default>(
    check: CheckKind,
    item_id: &str,
    outcome: ReviewResult<T>,
    degraded: &mut Vec<CheckKind>,
) -> T {
    match outcome {
        Ok(value) => value,
        Err(e) => {
            warn!(item_id, check = %check, error = %e, "sub-check degraded to default");
            degraded.push(check);
            T::default()
        }
    }
}
