use medreview_core::item::FlashcardContent;
use medreview_core::traits::IItemRepository;
use medreview_core::{Item, ItemContent, Reference};
use medreview_storage::{InMemoryRepository, StorageEngine};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = Item> {
    (
        "[A-Za-z ]{1,20}",
        ".{0,80}",
        ".{0,80}",
        proptest::collection::vec(("[A-Za-z ]{1,20}", proptest::option::of("[0-9]{1,4}")), 0..4),
    )
        .prop_map(|(subject, front, back, refs)| {
            let references = refs
                .into_iter()
                .map(|(source, page)| Reference {
                    source,
                    page,
                    url: None,
                })
                .collect();
            Item::new(
                subject,
                "Topic",
                ItemContent::Flashcard(FlashcardContent { front, back }),
                references,
            )
        })
}

proptest! {
    #[test]
    fn sqlite_and_memory_agree(item in arb_item()) {
        let memory = InMemoryRepository::new();
        let sqlite = StorageEngine::open_in_memory().unwrap();
        memory.put(&item).unwrap();
        sqlite.put(&item).unwrap();

        let a = memory.get(&item.id).unwrap().unwrap();
        let b = sqlite.get(&item.id).unwrap().unwrap();
        prop_assert_eq!(&a.content, &b.content);
        prop_assert_eq!(&a.references, &b.references);
        prop_assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
    }
}
