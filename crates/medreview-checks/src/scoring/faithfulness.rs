use medreview_core::constants::{BASE_SCORE, MAX_SCORE};
use medreview_core::item::ItemContent;

const DETAILED_ANSWER_CHARS: usize = 50;
const THOROUGH_ANSWER_CHARS: usize = 200;
const FULL_OPTION_SET: usize = 4;

/// 0–5 completeness of an item body.
///
/// Flashcards earn points for a detailed back; MCQs for a substantive
/// explanation and a full option set.
pub fn score_faithfulness(content: &ItemContent) -> u8 {
    let mut score = BASE_SCORE;
    match content {
        ItemContent::Flashcard(card) => {
            let len = card.back.trim().chars().count();
            if len > DETAILED_ANSWER_CHARS {
                score += 1;
            }
            if len > THOROUGH_ANSWER_CHARS {
                score += 1;
            }
        }
        ItemContent::Mcq(mcq) => {
            if mcq.explanation_text().trim().chars().count() > DETAILED_ANSWER_CHARS {
                score += 1;
            }
            if mcq.options.len() >= FULL_OPTION_SET {
                score += 1;
            }
        }
    }
    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use medreview_core::item::{FlashcardContent, McqContent};

    use super::*;

    fn flashcard(back: &str) -> ItemContent {
        ItemContent::Flashcard(FlashcardContent {
            front: "Q".to_string(),
            back: back.to_string(),
        })
    }

    #[test]
    fn short_back_is_base() {
        assert_eq!(score_faithfulness(&flashcard("60-100 beats per minute")), 3);
    }

    #[test]
    fn long_back_scores_higher() {
        assert_eq!(score_faithfulness(&flashcard(&"x".repeat(51))), 4);
        assert_eq!(score_faithfulness(&flashcard(&"x".repeat(201))), 5);
    }

    #[test]
    fn mcq_with_full_options_and_explanation() {
        let mcq = ItemContent::Mcq(McqContent {
            stem: "Which drug?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 0,
            explanation: Some("y".repeat(60)),
        });
        assert_eq!(score_faithfulness(&mcq), 5);
    }

    #[test]
    fn mcq_without_explanation() {
        let mcq = ItemContent::Mcq(McqContent {
            stem: "Which drug?".to_string(),
            options: vec!["a".into(), "b".into()],
            correct_index: 1,
            explanation: None,
        });
        assert_eq!(score_faithfulness(&mcq), 3);
    }
}
