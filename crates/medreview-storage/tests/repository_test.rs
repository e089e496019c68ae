//! Behaviour shared by both repositories, exercised against each.

use chrono::{Duration, Utc};
use medreview_core::item::{FlashcardContent, McqContent};
use medreview_core::models::{AutoCheckResult, CheckKind, CoverageLevel, NumericConflict};
use medreview_core::traits::IItemRepository;
use medreview_core::{Item, ItemContent, ItemKind, ItemStatus, Reference, ReviewError};
use medreview_storage::{InMemoryRepository, StorageEngine};

fn flashcard(front: &str) -> Item {
    Item::new(
        "Cardiology",
        "Vital signs",
        ItemContent::Flashcard(FlashcardContent {
            front: front.into(),
            back: "60-100 beats per minute".into(),
        }),
        vec![
            Reference::new("Guyton").with_page("112"),
            Reference::new("Harrison").with_url("https://example.org/harrison"),
        ],
    )
}

fn mcq() -> Item {
    Item::new(
        "Anatomy",
        "Cranial nerves",
        ItemContent::Mcq(McqContent {
            stem: "Which nerve abducts the eye?".into(),
            options: vec!["CN III".into(), "CN IV".into(), "CN VI".into(), "CN VII".into()],
            correct_index: 2,
            explanation: None,
        }),
        vec![Reference::new("Gray's Anatomy")],
    )
}

fn checks_for(item: &Item) -> AutoCheckResult {
    let mut result = AutoCheckResult::neutral(item.id.clone());
    result.reference_coverage = CoverageLevel::Medium;
    result.claims_with_numbers = vec!["60-100 bpm".into(), "70-110 bpm".into()];
    result.conflicts = vec![NumericConflict {
        first: "60-100 bpm".into(),
        second: "70-110 bpm".into(),
        shape: "- bpm".into(),
    }];
    result.possible_duplicates = vec!["other".into()];
    result.content_hash = item.content_hash().unwrap();
    result.degraded = vec![CheckKind::Duplicates];
    result
}

fn repositories() -> Vec<(&'static str, Box<dyn IItemRepository>)> {
    let memory: Box<dyn IItemRepository> = Box::new(InMemoryRepository::new());
    let sqlite: Box<dyn IItemRepository> = Box::new(StorageEngine::open_in_memory().unwrap());
    vec![("memory", memory), ("sqlite", sqlite)]
}

#[test]
fn put_then_get_round_trips_every_field() {
    for (name, repo) in repositories() {
        let mut item = flashcard("Normal resting heart rate?");
        item.status = ItemStatus::ChangesRequested;
        item.reviewer_note = Some("Cite the page".into());
        repo.put(&item).unwrap();

        let loaded = repo.get(&item.id).unwrap().expect(name);
        assert_eq!(loaded.subject, item.subject, "{name}");
        assert_eq!(loaded.content, item.content, "{name}");
        assert_eq!(loaded.references, item.references, "{name}");
        assert_eq!(loaded.status, ItemStatus::ChangesRequested, "{name}");
        assert_eq!(loaded.reviewer_note.as_deref(), Some("Cite the page"), "{name}");
        assert_eq!(loaded.created_at, item.created_at, "{name}");
    }
}

#[test]
fn missing_item_is_none() {
    for (name, repo) in repositories() {
        assert!(repo.get("nope").unwrap().is_none(), "{name}");
        assert!(repo.get_checks("nope").unwrap().is_none(), "{name}");
        assert!(!repo.delete("nope").unwrap(), "{name}");
    }
}

#[test]
fn list_by_kind_partitions_items() {
    for (name, repo) in repositories() {
        let a = flashcard("A");
        let b = mcq();
        repo.put(&a).unwrap();
        repo.put(&b).unwrap();

        assert_eq!(repo.list().unwrap().len(), 2, "{name}");
        let cards = repo.list_by_kind(ItemKind::Flashcard).unwrap();
        assert_eq!(cards.len(), 1, "{name}");
        assert_eq!(cards[0].id, a.id, "{name}");
        let mcqs = repo.list_by_kind(ItemKind::Mcq).unwrap();
        assert_eq!(mcqs[0].id, b.id, "{name}");
    }
}

#[test]
fn list_is_oldest_first() {
    for (name, repo) in repositories() {
        let mut older = flashcard("older");
        older.created_at = Utc::now() - Duration::days(2);
        let newer = flashcard("newer");
        repo.put(&newer).unwrap();
        repo.put(&older).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![older.id.clone(), newer.id.clone()], "{name}");
    }
}

#[test]
fn checks_round_trip_and_replace() {
    for (name, repo) in repositories() {
        let item = flashcard("Q");
        repo.put(&item).unwrap();
        let first = checks_for(&item);
        repo.put_checks(&first).unwrap();
        assert_eq!(repo.get_checks(&item.id).unwrap(), Some(first.clone()), "{name}");

        let mut second = AutoCheckResult::neutral(item.id.clone());
        second.content_hash = "other".into();
        repo.put_checks(&second).unwrap();
        assert_eq!(repo.get_checks(&item.id).unwrap(), Some(second), "{name}");
        assert_eq!(repo.list_checks().unwrap().len(), 1, "{name}");
    }
}

#[test]
fn checks_require_existing_item() {
    for (name, repo) in repositories() {
        let orphan = AutoCheckResult::neutral("ghost");
        assert!(
            matches!(repo.put_checks(&orphan), Err(ReviewError::ItemNotFound { .. })),
            "{name}"
        );
    }
}

#[test]
fn updating_item_keeps_its_checks() {
    for (name, repo) in repositories() {
        let mut item = flashcard("Q");
        repo.put(&item).unwrap();
        repo.put_checks(&checks_for(&item)).unwrap();

        item.topic = "Heart rate".into();
        item.references.pop();
        repo.put(&item).unwrap();

        let loaded = repo.get(&item.id).unwrap().unwrap();
        assert_eq!(loaded.topic, "Heart rate", "{name}");
        assert_eq!(loaded.references.len(), 1, "{name}");
        assert!(repo.get_checks(&item.id).unwrap().is_some(), "{name}");
    }
}

#[test]
fn delete_cascades_checks() {
    for (name, repo) in repositories() {
        let item = flashcard("Q");
        repo.put(&item).unwrap();
        repo.put_checks(&checks_for(&item)).unwrap();

        assert!(repo.delete(&item.id).unwrap(), "{name}");
        assert!(repo.get(&item.id).unwrap().is_none(), "{name}");
        assert!(repo.get_checks(&item.id).unwrap().is_none(), "{name}");
        assert!(repo.list_checks().unwrap().is_empty(), "{name}");
    }
}
