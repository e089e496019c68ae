use medreview_checks::claims::extract_claims;
use medreview_checks::{find_duplicates, normalize, similarity, AutoCheckEngine};
use medreview_core::item::FlashcardContent;
use medreview_core::models::Candidate;
use medreview_core::{Item, ItemContent, Reference};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,200}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_alphabet(s in ".{0,200}") {
        let out = normalize(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn self_similarity_is_one(a in "[a-z0-9]{2,40}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn self_is_always_a_duplicate(front in "[a-z]{3,20}", back in "[a-z ]{0,40}") {
        let content = ItemContent::Flashcard(FlashcardContent { front, back });
        let pool = vec![Candidate::new("self", content.clone())];
        prop_assert_eq!(find_duplicates(&content.plain_text(), &pool, 0.85), vec!["self".to_string()]);
    }

    #[test]
    fn claims_always_contain_a_digit(s in ".{0,200}") {
        for claim in extract_claims(&s) {
            prop_assert!(claim.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn orchestrator_is_deterministic(front in ".{0,60}", back in ".{0,120}", paged in any::<bool>()) {
        let engine = AutoCheckEngine::with_defaults().unwrap();
        let reference = if paged { Reference::new("Guyton").with_page("1") } else { Reference::new("Guyton") };
        let item = Item::new(
            "Physiology",
            "Properties",
            ItemContent::Flashcard(FlashcardContent { front, back }),
            vec![reference],
        );
        let pool = vec![Candidate::new("sibling", item.content.clone())];
        let first = serde_json::to_string(&engine.run(&item, &pool)).unwrap();
        let second = serde_json::to_string(&engine.run(&item, &pool)).unwrap();
        prop_assert_eq!(first, second);
    }
}
