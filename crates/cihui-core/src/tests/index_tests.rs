use super::fixtures::pool;
use crate::index::{WordIndex, strip_tones};

fn ids(words: &[cihui_types::Word]) -> Vec<&str> {
    words.iter().map(|w| w.id.as_str()).collect()
}

#[test]
fn empty_term_returns_pool_unchanged() {
    let pool = pool();
    let found = WordIndex::search(&pool, "");
    assert_eq!(ids(&found), ids(&pool));

    let found = WordIndex::search(&pool, "   ");
    assert_eq!(ids(&found), ids(&pool));
}

#[test]
fn tone_number_and_bare_queries_match_diacritics() {
    let pool = pool();
    for term in ["ni3hao3", "nihao", "nǐ hǎo", "NIHAO"] {
        let found = WordIndex::search(&pool, term);
        assert!(
            found.iter().any(|w| w.id == "w1"),
            "term {term:?} should match 你好"
        );
    }
}

#[test]
fn matches_headword_and_traditional() {
    let pool = pool();
    assert!(WordIndex::search(&pool, "咖啡").iter().any(|w| w.id == "w2"));
    assert!(WordIndex::search(&pool, "老師").iter().any(|w| w.id == "w5"));
}

#[test]
fn matches_meanings_case_insensitively() {
    let pool = pool();
    assert!(WordIndex::search(&pool, "COFFEE").iter().any(|w| w.id == "w2"));
    // secondary meanings participate too
    assert!(WordIndex::search(&pool, "air").iter().any(|w| w.id == "w4"));
}

#[test]
fn narrowing_a_term_never_adds_results() {
    let pool = pool();
    let term = "nihao";
    for cut in 1..=term.len() {
        let narrow = WordIndex::search(&pool, term);
        let wide = WordIndex::search(&pool, &term[..cut]);
        let wide_ids: Vec<&str> = ids(&wide);
        for w in &narrow {
            assert!(wide_ids.contains(&w.id.as_str()), "prefix search lost {}", w.id);
        }
    }
}

#[test]
fn strip_tones_removes_combining_marks() {
    assert_eq!(strip_tones("nǐ hǎo"), "ni hao");
    assert_eq!(strip_tones("chá"), "cha");
}

#[test]
fn level_grouping_counts_every_word() {
    let index = WordIndex::new(pool());
    let counts = index.level_counts();
    let total: usize = counts.values().sum();
    assert_eq!(total, index.len());
}
