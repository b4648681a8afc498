use std::collections::HashSet;
use std::time::Duration;

use cihui_types::{PracticeMode, SessionSize};

use super::fixtures::{cloze_pool, pool, rng};
use crate::engine::{ChoiceEngine, Phase, Prompt};
use crate::session::build_session;

fn correct_index(engine: &ChoiceEngine<rand_chacha::ChaCha8Rng>) -> usize {
    let round = engine.round().expect("round expected");
    round
        .options
        .iter()
        .position(|o| o.word_id == round.target.id)
        .expect("target option present")
}

#[test]
fn quiz_plays_one_round_per_session_word() {
    let pool = pool();
    let session = build_session(&pool, PracticeMode::Quiz, SessionSize::Count(5), &mut rng())
        .unwrap();
    let session_ids: HashSet<String> = session.words.iter().map(|w| w.id.clone()).collect();

    let mut engine = ChoiceEngine::new(session, pool, rng());
    let mut seen = HashSet::new();
    let mut rounds = 0;

    while engine.phase() == Phase::Running {
        seen.insert(engine.round().unwrap().target.id.clone());
        let idx = correct_index(&engine);
        let answered = engine.answer(idx).unwrap();
        assert!(answered.correct);
        assert_eq!(answered.delay, Some(Duration::from_millis(1500)));
        rounds += 1;
        engine.advance();
    }

    assert_eq!(rounds, 5);
    assert_eq!(seen, session_ids);

    let result = engine.into_result();
    assert_eq!(result.score, 5);
    assert_eq!(result.total, Some(5));
    let reported: HashSet<String> = result
        .mastered
        .iter()
        .chain(result.needs_review.iter())
        .map(|w| w.id.clone())
        .collect();
    assert_eq!(reported, session_ids);
}

#[test]
fn quiz_accepts_any_preferred_meaning() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Quiz, SessionSize::All, &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    let round = engine.round().unwrap();
    let target = round.target.clone();
    let idx = correct_index(&engine);
    let label = engine.round().unwrap().options[idx].label.clone();

    // the displayed label is one sampled member of the preferred list
    assert!(target.preferred_meanings().contains(&label));
    assert!(engine.answer(idx).unwrap().correct);
}

#[test]
fn quiz_round_has_four_options_and_no_answer_leak() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Quiz, SessionSize::All, &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    while engine.phase() == Phase::Running {
        let round = engine.round().unwrap();
        assert_eq!(round.options.len(), 4);
        // no distractor label may equal a correct string for the target
        for (i, option) in round.options.iter().enumerate() {
            if option.word_id != round.target.id {
                assert!(
                    !round.target.preferred_meanings().contains(&option.label),
                    "distractor {i} collides with a correct answer"
                );
            }
        }
        let idx = correct_index(&engine);
        engine.answer(idx).unwrap();
        engine.advance();
    }
}

#[test]
fn wrong_answer_lands_in_needs_review() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Quiz, SessionSize::Count(4), &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    let first_target = engine.round().unwrap().target.clone();
    let wrong = (correct_index(&engine) + 1) % 4;
    assert!(!engine.answer(wrong).unwrap().correct);
    engine.advance();
    while engine.phase() == Phase::Running {
        let idx = correct_index(&engine);
        engine.answer(idx).unwrap();
        engine.advance();
    }

    let result = engine.into_result();
    assert_eq!(result.score, 3);
    assert!(result.needs_review.iter().any(|w| w.id == first_target.id));
    assert!(!result.mastered.iter().any(|w| w.id == first_target.id));
}

#[test]
fn second_answer_before_advance_is_ignored() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Quiz, SessionSize::All, &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    let idx = correct_index(&engine);
    assert!(engine.answer(idx).is_some());
    assert!(engine.answer(idx).is_none());
    assert_eq!(engine.rounds_played(), 1);
}

#[test]
fn speed_sixty_idle_ticks_finish_with_score_zero() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Speed, SessionSize::All, &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());
    assert_eq!(engine.remaining_secs(), Some(60));

    for _ in 0..59 {
        assert_eq!(engine.tick(), Phase::Running);
    }
    assert_eq!(engine.tick(), Phase::Finished);
    assert!(engine.round().is_none());
    assert!(engine.answer(0).is_none());

    let result = engine.into_result();
    assert_eq!(result.score, 0);
    assert_eq!(result.total, None);
}

#[test]
fn speed_regenerates_rounds_without_delay() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Speed, SessionSize::All, &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    for _ in 0..10 {
        let idx = correct_index(&engine);
        let answered = engine.answer(idx).unwrap();
        assert!(answered.correct);
        assert_eq!(answered.delay, None);
        assert!(engine.round().is_some(), "next round must be ready at once");
    }
    // round count is unbounded by the session size, only by the clock
    assert_eq!(engine.rounds_played(), 10);
    assert_eq!(engine.score(), 10);
}

#[test]
fn pinyin_round_shows_romanization_and_checks_ids() {
    let pool = pool();
    let session =
        build_session(&pool, PracticeMode::Pinyin, SessionSize::Count(4), &mut rng()).unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    let round = engine.round().unwrap();
    let target = round.target.clone();
    match &round.prompt {
        Prompt::Romanization { pinyin, hint } => {
            assert_eq!(pinyin, &target.romanization);
            assert!(target.preferred_meanings().contains(hint));
        }
        other => panic!("unexpected prompt: {other:?}"),
    }
    // options render headwords
    assert!(round.options.iter().any(|o| o.label == target.headword));

    let idx = correct_index(&engine);
    let answered = engine.answer(idx).unwrap();
    assert!(answered.correct);
    assert_eq!(answered.delay, Some(Duration::from_millis(1200)));
}

#[test]
fn sentence_fill_masks_the_headword() {
    let pool = cloze_pool();
    let session = build_session(
        &pool,
        PracticeMode::SentenceFill,
        SessionSize::All,
        &mut rng(),
    )
    .unwrap();
    let mut engine = ChoiceEngine::new(session, pool, rng());

    while engine.phase() == Phase::Running {
        let round = engine.round().unwrap();
        let target = round.target.clone();
        match &round.prompt {
            Prompt::ClozeSentence(sentence) => {
                assert!(sentence.contains("____"));
                assert!(!sentence.contains(&target.headword));
            }
            other => panic!("unexpected prompt: {other:?}"),
        }
        let idx = correct_index(&engine);
        let answered = engine.answer(idx).unwrap();
        assert!(answered.correct);
        assert_eq!(answered.delay, Some(Duration::from_millis(2000)));
        engine.advance();
    }
}
