use cihui_types::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// One display meaning for a word, drawn uniformly from its preferred
/// meaning list. The same word can present a different string on
/// different rounds, so correctness checks must test membership in the
/// full preferred list, never equality against the sampled string.
pub fn pick_meaning<R: Rng>(word: &Word, rng: &mut R) -> String {
    word.preferred_meanings()
        .choose(rng)
        .cloned()
        .unwrap_or_default()
}

/// `count` plausible wrong Words: everything but the target, shuffled
/// uniformly, truncated. Returns fewer when the pool is small; callers
/// gate mode entry on minimum pool size.
pub fn distractor_words<R: Rng>(
    target: &Word,
    pool: &[Word],
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    let mut candidates: Vec<&Word> = pool.iter().filter(|w| w.id != target.id).collect();
    candidates.shuffle(rng);
    candidates.into_iter().take(count).cloned().collect()
}

/// Distractor display strings for meaning-based modes: one randomly
/// picked preferred meaning per sampled word.
pub fn distractor_meanings<R: Rng>(
    target: &Word,
    pool: &[Word],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    distractor_words(target, pool, count, rng)
        .iter()
        .map(|w| pick_meaning(w, rng))
        .collect()
}
