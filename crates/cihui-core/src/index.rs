use std::collections::BTreeMap;

use cihui_types::{Level, Word};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The full word collection, grouped by level, with tone-insensitive
/// multi-field search. One predicate backs both the global instant search
/// and the in-level filter box.
pub struct WordIndex {
    words: Vec<Word>,
}

impl WordIndex {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn all(&self) -> &[Word] {
        &self.words
    }

    /// Words of one level, in load order.
    pub fn level(&self, level: Level) -> Vec<Word> {
        self.words
            .iter()
            .filter(|w| w.level == level)
            .cloned()
            .collect()
    }

    /// Level -> word count, for the level picker.
    pub fn level_counts(&self) -> BTreeMap<Level, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.level).or_insert(0) += 1;
        }
        counts
    }

    pub fn search_all(&self, term: &str) -> Vec<Word> {
        Self::search(&self.words, term)
    }

    /// Case- and tone-insensitive substring search across headword,
    /// traditional form, romanization and every meaning. A word matches if
    /// any field matches. An empty term returns the pool unchanged.
    pub fn search(pool: &[Word], term: &str) -> Vec<Word> {
        let term = term.trim();
        if term.is_empty() {
            return pool.to_vec();
        }

        let needle = term.to_lowercase();
        let folded_needle = fold_romanization(term);

        pool.iter()
            .filter(|w| matches_term(w, &needle, &folded_needle))
            .cloned()
            .collect()
    }
}

fn matches_term(word: &Word, needle: &str, folded_needle: &str) -> bool {
    if word.headword.contains(needle) {
        return true;
    }
    if let Some(traditional) = &word.traditional {
        if traditional.contains(needle) {
            return true;
        }
    }

    let romanization = word.romanization.to_lowercase();
    if romanization.contains(needle) {
        return true;
    }
    if !folded_needle.is_empty() && fold_romanization(&romanization).contains(folded_needle) {
        return true;
    }

    word.meanings
        .iter()
        .chain(word.secondary_meanings.iter())
        .any(|m| m.to_lowercase().contains(needle))
}

/// Strip tone diacritics: canonical decomposition, then drop combining marks.
pub fn strip_tones(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse a romanization (or a query aimed at one) to a tone-free,
/// space-free, digit-free lowercase form, so `"ni3hao3"` and `"nihao"`
/// both reach `"nǐ hǎo"`.
fn fold_romanization(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace() && !c.is_ascii_digit() && *c != '\'')
        .flat_map(|c| c.to_lowercase())
        .collect()
}
