use super::fixtures::word;
use crate::results::ResultAggregator;

#[test]
fn each_list_dedups_by_id_keeping_first_occurrence() {
    let a = word("a", "茶", "chá", &["tea"]);
    let b = word("b", "水", "shuǐ", &["water"]);

    let mut agg = ResultAggregator::new();
    agg.record(&b, true);
    agg.record(&a, true);
    agg.record(&b, true);
    agg.record(&a, false);

    let result = agg.finalize(3, None);
    let mastered: Vec<&str> = result.mastered.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(mastered, ["b", "a"]);
    assert_eq!(result.score, 3);
}

#[test]
fn a_word_answered_both_ways_stays_in_both_lists() {
    // Speed Challenge samples with replacement, so this genuinely happens;
    // the double listing is the intended report shape.
    let a = word("a", "茶", "chá", &["tea"]);

    let mut agg = ResultAggregator::new();
    agg.record(&a, true);
    agg.record(&a, false);
    agg.record(&a, true);

    let result = agg.finalize(2, None);
    assert_eq!(result.mastered.len(), 1);
    assert_eq!(result.needs_review.len(), 1);
    assert_eq!(result.mastered[0].id, "a");
    assert_eq!(result.needs_review[0].id, "a");
}
