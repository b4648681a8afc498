use cihui_types::{PracticeMode, SessionSize};

use super::fixtures::{pool, rng};
use crate::engine::{FlipOutcome, MatchEngine, Phase};
use crate::session::{MATCH_FLIPBACK_DELAY, MATCH_REVEAL_DELAY, build_session};

fn new_engine() -> MatchEngine {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Match, SessionSize::All, &mut rng()).unwrap();
    MatchEngine::new(session, &mut rng())
}

fn pair_for(engine: &MatchEngine, skip_matched: bool) -> (usize, usize) {
    let cards = engine.cards();
    for a in 0..cards.len() {
        if skip_matched && cards[a].matched {
            continue;
        }
        for b in (a + 1)..cards.len() {
            if cards[a].word_id == cards[b].word_id && !(skip_matched && cards[b].matched) {
                return (a, b);
            }
        }
    }
    panic!("no unmatched pair left");
}

#[test]
fn two_cards_per_word() {
    let engine = new_engine();
    assert_eq!(engine.cards().len(), 12);
    for card in engine.cards() {
        let twins = engine
            .cards()
            .iter()
            .filter(|c| c.word_id == card.word_id)
            .count();
        assert_eq!(twins, 2);
    }
}

#[test]
fn matching_all_pairs_finishes_in_six_resolutions() {
    let mut engine = new_engine();
    let mut resolutions = 0;

    while engine.phase() == Phase::Running {
        let (a, b) = pair_for(&engine, true);
        assert_eq!(engine.flip(a), FlipOutcome::Revealed);
        match engine.flip(b) {
            FlipOutcome::Pair { matched, delay } => {
                assert!(matched);
                assert_eq!(delay, MATCH_REVEAL_DELAY);
            }
            other => panic!("expected a pair, got {other:?}"),
        }
        engine.resolve();
        resolutions += 1;
        assert!(resolutions <= 6, "too many resolutions");
    }

    assert_eq!(resolutions, 6);
    assert_eq!(engine.solved_pairs(), 6);
    let result = engine.into_result();
    assert_eq!(result.score, 6);
    assert_eq!(result.total, Some(6));
    assert_eq!(result.mastered.len(), 6);
}

#[test]
fn mismatched_pair_flips_back() {
    let mut engine = new_engine();
    let cards = engine.cards();
    let a = 0;
    let b = (1..cards.len())
        .find(|&i| cards[i].word_id != cards[a].word_id)
        .unwrap();

    engine.flip(a);
    match engine.flip(b) {
        FlipOutcome::Pair { matched, delay } => {
            assert!(!matched);
            assert_eq!(delay, MATCH_FLIPBACK_DELAY);
        }
        other => panic!("expected a pair, got {other:?}"),
    }
    engine.resolve();

    assert!(!engine.cards()[a].face_up);
    assert!(!engine.cards()[b].face_up);
    assert!(!engine.cards()[a].matched);
    assert!(!engine.cards()[b].matched);
    assert_eq!(engine.phase(), Phase::Running);
}

#[test]
fn third_flip_while_two_pending_is_ignored() {
    let mut engine = new_engine();
    let (a, b) = pair_for(&engine, false);
    let c = (0..engine.cards().len()).find(|&i| i != a && i != b).unwrap();

    engine.flip(a);
    engine.flip(b);
    assert_eq!(engine.flip(c), FlipOutcome::Ignored);
}

#[test]
fn refreshing_a_face_up_card_is_ignored() {
    let mut engine = new_engine();
    assert_eq!(engine.flip(0), FlipOutcome::Revealed);
    assert_eq!(engine.flip(0), FlipOutcome::Ignored);
}

#[test]
fn mismatch_feeds_the_review_list() {
    let mut engine = new_engine();
    let cards = engine.cards();
    let a = 0;
    let b = (1..cards.len())
        .find(|&i| cards[i].word_id != cards[a].word_id)
        .unwrap();
    let wrong_ids = [cards[a].word_id.clone(), cards[b].word_id.clone()];

    engine.flip(a);
    engine.flip(b);
    engine.resolve();

    let result = engine.into_result();
    for id in wrong_ids {
        assert!(result.needs_review.iter().any(|w| w.id == id));
    }
}
