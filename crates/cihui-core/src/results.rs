use std::collections::HashSet;

use cihui_types::{SessionResult, Word};

/// Accumulates round outcomes into the post-session report.
///
/// Words repeat across rounds under sampling with replacement (Speed
/// Challenge), so both lists are multisets until finalization, which
/// deduplicates each list by id independently, first occurrence winning.
/// A word answered correctly once and incorrectly another time stays in
/// both lists; that double-listing is deliberate.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    correct: Vec<Word>,
    wrong: Vec<Word>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: &Word, correct: bool) {
        if correct {
            self.correct.push(word.clone());
        } else {
            self.wrong.push(word.clone());
        }
    }

    pub fn finalize(self, score: u32, total: Option<u32>) -> SessionResult {
        SessionResult {
            score,
            total,
            mastered: dedup_by_id(self.correct),
            needs_review: dedup_by_id(self.wrong),
        }
    }
}

fn dedup_by_id(words: Vec<Word>) -> Vec<Word> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| seen.insert(w.id.clone()))
        .collect()
}
