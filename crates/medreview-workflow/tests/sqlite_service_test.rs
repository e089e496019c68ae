use medreview_core::config::{ReviewConfig, StorageConfig};
use medreview_core::item::FlashcardContent;
use medreview_core::traits::IItemRepository;
use medreview_core::{ItemContent, ItemStatus, Reference};
use medreview_storage::StorageEngine;
use medreview_workflow::{ItemPatch, NewItem, QualityFlag, QueueFilter, ReviewAction, ReviewService};

fn submission(back: &str) -> NewItem {
    NewItem::new(
        "Physiology",
        "Renal",
        ItemContent::Flashcard(FlashcardContent {
            front: "Normal glomerular filtration rate?".into(),
            back: back.into(),
        }),
        vec![Reference::new("Guyton").with_page("330")],
    )
}

#[test]
fn full_lifecycle_on_a_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.db");
    let storage = StorageConfig::default();
    let config = ReviewConfig::default();

    let (first_id, second_id) = {
        let engine = StorageEngine::open_path(&path, &storage).unwrap();
        let svc = ReviewService::new(engine, &config).unwrap();
        let first = svc.intake(submission("About 125 ml per minute")).unwrap();
        let second = svc.intake(submission("About 125 ml per minute")).unwrap();
        assert_eq!(
            second.checks.as_ref().unwrap().possible_duplicates,
            vec![first.item.id.clone()]
        );

        svc.edit(
            &second.item.id,
            ItemPatch {
                content: Some(ItemContent::Flashcard(FlashcardContent {
                    front: "Which vessel drains the glomerulus?".into(),
                    back: "The efferent arteriole".into(),
                })),
                ..Default::default()
            },
        )
        .unwrap();
        svc.transition(&first.item.id, ReviewAction::Publish).unwrap();
        (first.item.id, second.item.id)
    };

    let engine = StorageEngine::open_path(&path, &storage).unwrap();
    let svc = ReviewService::new(engine, &config).unwrap();

    let first = svc.detail(&first_id).unwrap();
    assert_eq!(first.item.status, ItemStatus::Published);
    assert!(!first.stale);

    let second = svc.detail(&second_id).unwrap();
    let checks = second.checks.unwrap();
    assert!(checks.possible_duplicates.is_empty());
    assert!(checks.claims_with_numbers.is_empty());

    let flagged = svc
        .queue(&QueueFilter {
            flag: Some(QualityFlag::Duplicates),
            ..Default::default()
        })
        .unwrap();
    assert!(flagged.is_empty());

    svc.delete(&second_id).unwrap();
    assert!(svc.repository().get_checks(&second_id).unwrap().is_none());
    assert_eq!(svc.analytics().unwrap().totals.total, 1);
}
