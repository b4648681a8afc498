use super::fixtures::pool;
use crate::hunter::{HuntReport, QuestOutcome, clean, explore, quest};

fn frags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn clean_keeps_ideographs_only() {
    assert_eq!(clean("Hello 你好 123!"), "你好");
    assert_eq!(clean("kā fēi"), "");
    assert_eq!(clean("请喝咖啡吧"), "请喝咖啡吧");
}

#[test]
fn explore_prefers_exact_matches() {
    let pool = pool();
    match explore(&frags(&["咖啡"]), &pool) {
        HuntReport::Found(w) => assert_eq!(w.id, "w2"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn explore_matches_traditional_forms() {
    let pool = pool();
    match explore(&frags(&["abc", "老師"]), &pool) {
        HuntReport::Found(w) => assert_eq!(w.id, "w5"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn explore_falls_back_to_substring_for_two_plus_ideographs() {
    let pool = pool();
    match explore(&frags(&["请喝咖啡吧"]), &pool) {
        HuntReport::Found(w) => assert_eq!(w.id, "w2"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn single_ideograph_headwords_never_substring_match() {
    let pool = pool();
    // 茶 appears inside the fragment, but one-ideograph headwords only
    // match whole fragments
    assert!(matches!(
        explore(&frags(&["喝茶吧"]), &pool),
        HuntReport::NotInList
    ));
    assert!(matches!(
        explore(&frags(&["茶"]), &pool),
        HuntReport::Found(w) if w.id == "w3"
    ));
}

#[test]
fn empty_or_non_ideograph_fragments_are_nothing_detected() {
    let pool = pool();
    assert!(matches!(explore(&[], &pool), HuntReport::NothingDetected));
    assert!(matches!(
        explore(&frags(&["abc", "123"]), &pool),
        HuntReport::NothingDetected
    ));
}

#[test]
fn quest_succeeds_on_containment() {
    let pool = pool();
    let target = pool.iter().find(|w| w.id == "w2").unwrap();
    assert!(matches!(
        quest(target, &frags(&["请喝咖啡吧"]), &pool),
        QuestOutcome::Done
    ));
}

#[test]
fn quest_reports_the_word_actually_found() {
    let pool = pool();
    let target = pool.iter().find(|w| w.id == "w7").unwrap();
    match quest(target, &frags(&["请喝咖啡吧"]), &pool) {
        QuestOutcome::WrongWord(found) => assert_eq!(found.id, "w2"),
        other => panic!("expected wrong-word feedback, got {other:?}"),
    }
}

#[test]
fn quest_miss_without_any_pool_match() {
    let pool = pool();
    let target = pool.iter().find(|w| w.id == "w7").unwrap();
    assert!(matches!(
        quest(target, &frags(&["这是一个句子"]), &pool),
        QuestOutcome::Missed
    ));
    assert!(matches!(
        quest(target, &[], &pool),
        QuestOutcome::NothingDetected
    ));
}
