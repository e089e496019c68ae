use medreview_checks::AutoCheckEngine;
use medreview_core::config::{ChecksConfig, ClaimMode, NoClaimsCoverage};
use medreview_core::errors::{ReviewError, ReviewResult};
use medreview_core::item::{FlashcardContent, McqContent};
use medreview_core::models::{BloomLevel, Candidate, CheckKind, CompetencyDomain, CoverageLevel};
use medreview_core::traits::{IAutoChecker, ICandidateSource};
use medreview_core::{Item, ItemContent, ItemKind, Reference};

fn flashcard(front: &str, back: &str) -> ItemContent {
    ItemContent::Flashcard(FlashcardContent {
        front: front.into(),
        back: back.into(),
    })
}

fn heart_rate_card() -> Item {
    Item::new(
        "Cardiology",
        "Vital signs",
        flashcard("What is the normal resting heart rate?", "60-100 beats per minute"),
        vec![Reference::new("Guyton and Hall")],
    )
}

struct UnavailablePool;

impl ICandidateSource for UnavailablePool {
    fn candidates(&self, _kind: ItemKind) -> ReviewResult<Vec<Candidate>> {
        Err(ReviewError::CandidatePoolUnavailable {
            reason: "store offline".into(),
        })
    }
}

// --- End-to-end ---

#[test]
fn resting_heart_rate_flashcard() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = heart_rate_card();
    let result = engine.run(&item, &Vec::<Candidate>::new());

    assert_eq!(result.item_id, item.id);
    assert_eq!(result.claims_with_numbers, vec!["60-100 beats per minute"]);
    assert_eq!(result.reference_coverage, CoverageLevel::Low);
    assert!(result.possible_duplicates.is_empty());
    assert_eq!(result.bloom_level, BloomLevel::Remember);
    assert!(result.conflicts.is_empty());
    assert!(result.degraded.is_empty());
    assert_eq!(result.content_hash, item.content_hash().unwrap());
}

#[test]
fn same_shaped_claims_conflict() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = Item::new(
        "Cardiology",
        "Vital signs",
        flashcard("Resting heart rate", "Quoted as 60-100 bpm or 70-110 bpm"),
        vec![],
    );
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].description(), "60-100 bpm vs 70-110 bpm");
}

#[test]
fn different_shapes_do_not_conflict() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = Item::new(
        "Anatomy",
        "Heart",
        flashcard("Heart facts", "Rate 60-100 bpm and wall 10 mm thick"),
        vec![],
    );
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.claims_with_numbers.len(), 2);
    assert!(result.conflicts.is_empty());
}

// --- Duplicates ---

#[test]
fn item_never_lists_itself_as_duplicate() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = heart_rate_card();
    let pool = vec![
        Candidate::from(&item),
        Candidate::new("twin", item.content.clone()),
    ];
    let result = engine.run(&item, &pool);
    assert_eq!(result.possible_duplicates, vec!["twin"]);
}

#[test]
fn other_kinds_are_not_candidates() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = heart_rate_card();
    let pool = vec![Candidate::new(
        "mcq",
        ItemContent::Mcq(McqContent {
            stem: "What is the normal resting heart rate?".into(),
            options: vec!["60-100 beats per minute".into()],
            correct_index: 0,
            explanation: None,
        }),
    )];
    assert!(engine.run(&item, &pool).possible_duplicates.is_empty());
}

#[test]
fn unavailable_pool_degrades_duplicates_only() {
    let engine = AutoCheckEngine::with_defaults().unwrap();
    let item = heart_rate_card();
    let result = engine.run(&item, &UnavailablePool);

    assert!(result.possible_duplicates.is_empty());
    assert_eq!(result.degraded, vec![CheckKind::Duplicates]);
    assert!(result.is_degraded());
    // Everything else is still computed.
    assert_eq!(result.claims_with_numbers.len(), 1);
    assert_eq!(result.groundedness_score, 4);
}

// --- Configuration ---

#[test]
fn bare_number_mode_counts_page_numbers() {
    let config = ChecksConfig {
        claim_mode: ClaimMode::BareNumbers,
        ..Default::default()
    };
    let engine = AutoCheckEngine::new(config).unwrap();
    let item = Item::new("Anatomy", "Skull", flashcard("Skull bones", "See page 12"), vec![]);
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.claims_with_numbers, vec!["12"]);
}

#[test]
fn bare_number_mode_flags_differing_counts() {
    let config = ChecksConfig {
        claim_mode: ClaimMode::BareNumbers,
        ..Default::default()
    };
    let engine = AutoCheckEngine::new(config).unwrap();
    let item = Item::new(
        "Haematology",
        "Blood film",
        flashcard(
            "Normal white cell count on a film?",
            "Normal count is 12 per field, some texts say 15 per field",
        ),
        vec![],
    );
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.claims_with_numbers, vec!["12", "15"]);
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].description(), "12 vs 15");
}

#[test]
fn vacuous_coverage_for_claim_free_items() {
    let config = ChecksConfig {
        no_claims_coverage: NoClaimsCoverage::Vacuous,
        ..Default::default()
    };
    let engine = AutoCheckEngine::new(config).unwrap();
    let item = Item::new("Anatomy", "Skull", flashcard("Name the skull bones", "Frontal, parietal"), vec![]);
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.reference_coverage, CoverageLevel::High);

    let strict = AutoCheckEngine::with_defaults().unwrap();
    assert_eq!(
        strict.run(&item, &Vec::<Candidate>::new()).reference_coverage,
        CoverageLevel::Low
    );
}

#[test]
fn extra_units_are_recognised() {
    let config = ChecksConfig {
        extra_units: vec!["units".into(), "iu".into()],
        ..Default::default()
    };
    let engine = AutoCheckEngine::new(config).unwrap();
    let item = Item::new(
        "Pharmacology",
        "Insulin",
        flashcard("Starting basal dose", "10 units at night, up to 400 IU daily"),
        vec![],
    );
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.claims_with_numbers, vec!["10 units", "400 IU"]);
}

#[test]
fn default_competency_is_configurable() {
    let config = ChecksConfig {
        default_competency: CompetencyDomain::Physiology,
        ..Default::default()
    };
    let engine = AutoCheckEngine::new(config).unwrap();
    let item = Item::new("Pharmacology", "Beta blockers", flashcard("Q", "A"), vec![]);
    let result = engine.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.suggested_comps, vec![CompetencyDomain::Physiology]);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChecksConfig {
        duplicate_threshold: 1.5,
        ..Default::default()
    };
    assert!(matches!(
        AutoCheckEngine::new(config),
        Err(ReviewError::ConfigError(_))
    ));
}

// --- Determinism ---

#[test]
fn parallel_and_sequential_runs_agree() {
    let parallel = AutoCheckEngine::with_defaults().unwrap();
    let sequential = AutoCheckEngine::new(ChecksConfig {
        parallel: false,
        ..Default::default()
    })
    .unwrap();
    let item = heart_rate_card();
    let pool = vec![Candidate::new("twin", item.content.clone())];

    let a = serde_json::to_string(&parallel.run(&item, &pool)).unwrap();
    let b = serde_json::to_string(&sequential.run(&item, &pool)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn usable_through_the_checker_trait() {
    let checker: Box<dyn IAutoChecker> = Box::new(AutoCheckEngine::with_defaults().unwrap());
    let item = heart_rate_card();
    let result = checker.run(&item, &Vec::<Candidate>::new());
    assert_eq!(result.item_id, item.id);
}
