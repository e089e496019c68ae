use medreview_core::config::ReviewConfig;
use medreview_core::errors::ReviewError;
use medreview_core::{ItemContent, Reference};
use medreview_storage::InMemoryRepository;
use medreview_workflow::{NewItem, ReviewService};
use serde::Deserialize;

#[derive(Deserialize)]
struct InvalidCase {
    case: String,
    field: String,
    subject: String,
    topic: String,
    content: ItemContent,
    references: Vec<Reference>,
}

#[test]
fn golden_invalid_items_are_rejected_on_the_named_field() {
    let cases: Vec<InvalidCase> = test_fixtures::load_fixture("golden/intake/invalid_items.json");
    assert!(!cases.is_empty());

    let svc = ReviewService::new(InMemoryRepository::new(), &ReviewConfig::default()).unwrap();
    for case in cases {
        let submission = NewItem::new(case.subject, case.topic, case.content, case.references);
        match svc.intake(submission) {
            Err(ReviewError::Validation { field, .. }) => {
                assert_eq!(field, case.field, "case '{}'", case.case)
            }
            other => panic!("case '{}': expected validation error, got {other:?}", case.case),
        }
    }
    assert!(svc.repository().is_empty());
}

#[test]
fn intake_payload_deserializes_from_camel_case_json() {
    let submission: NewItem = serde_json::from_value(serde_json::json!({
        "subject": "Pharmacology",
        "topic": "Beta blockers",
        "content": {
            "kind": "MCQ",
            "stem": "Which drug is cardioselective?",
            "options": ["Metoprolol", "Propranolol", "Nadolol", "Timolol"],
            "correctIndex": 0,
            "explanation": "Metoprolol acts mainly on beta-1 receptors."
        },
        "references": [{ "source": "Katzung", "page": "160" }]
    }))
    .unwrap();

    let svc = ReviewService::new(InMemoryRepository::new(), &ReviewConfig::default()).unwrap();
    let detail = svc.intake(submission).unwrap();
    let checks = detail.checks.unwrap();
    assert_eq!(checks.groundedness_score, 5);
    assert!(checks.claims_with_numbers.is_empty());
}

#[test]
fn stricter_intake_rules_come_from_config() {
    let config = ReviewConfig::from_toml(
        r#"
        [intake]
        min_mcq_options = 2
        require_page_for_numeric_claims = true
        "#,
    )
    .unwrap();
    let svc = ReviewService::new(InMemoryRepository::new(), &config).unwrap();

    let submission = NewItem::new(
        "Cardiology",
        "Vital signs",
        ItemContent::Flashcard(medreview_core::item::FlashcardContent {
            front: "Resting heart rate?".into(),
            back: "60-100 bpm".into(),
        }),
        vec![Reference::new("Guyton")],
    );
    let err = svc.intake(submission).unwrap_err();
    assert!(matches!(err, ReviewError::Validation { ref field, .. } if field == "references.page"));
}
