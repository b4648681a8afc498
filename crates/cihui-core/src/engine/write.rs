use std::time::Duration;

use cihui_types::{SessionResult, Word};
use unicode_normalization::UnicodeNormalization;

use super::Phase;
use super::choice::Answered;
use crate::results::ResultAggregator;
use crate::session::{ModeSpec, PracticeSession};

/// Answers no longer than this many characters must match exactly;
/// longer ones are also accepted as substrings of the input.
const SUBSTRING_MIN_CHARS: usize = 3;

/// Free-text entry mode: one word at a time, no option set.
pub struct WriteEngine {
    words: Vec<Word>,
    cursor: usize,
    advance_delay: Duration,
    answered: bool,
    score: u32,
    results: ResultAggregator,
    phase: Phase,
}

impl WriteEngine {
    pub fn new(session: PracticeSession) -> Self {
        let advance_delay = ModeSpec::of(session.mode).advance_delay;
        let phase = if session.words.is_empty() {
            Phase::Finished
        } else {
            Phase::Running
        };
        Self {
            words: session.words,
            cursor: 0,
            advance_delay,
            answered: false,
            score: 0,
            results: ResultAggregator::new(),
            phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.words.len() as u32
    }

    pub fn round_number(&self) -> u32 {
        self.cursor as u32 + 1
    }

    /// The word currently being asked, `None` once finished.
    pub fn current(&self) -> Option<&Word> {
        if self.phase == Phase::Finished {
            return None;
        }
        self.words.get(self.cursor)
    }

    pub fn answer(&mut self, input: &str) -> Option<Answered> {
        if self.phase == Phase::Finished || self.answered {
            return None;
        }
        let word = self.words.get(self.cursor)?.clone();
        let correct = accepts(&word, input);

        self.answered = true;
        if correct {
            self.score += 1;
        }
        self.results.record(&word, correct);
        Some(Answered {
            correct,
            delay: Some(self.advance_delay),
        })
    }

    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Finished || !self.answered {
            return self.phase;
        }
        self.answered = false;
        self.cursor += 1;
        if self.cursor >= self.words.len() {
            self.phase = Phase::Finished;
        }
        self.phase
    }

    pub fn into_result(self) -> SessionResult {
        let total = Some(self.words.len() as u32);
        self.results.finalize(self.score, total)
    }
}

/// A written answer is accepted when, after trimming and case-folding, it
/// equals any meaning (preferred or fallback), or contains one longer
/// than [`SUBSTRING_MIN_CHARS`]. Short meanings stay exact-only so "tea"
/// is not found inside unrelated input.
pub fn accepts(word: &Word, input: &str) -> bool {
    let input = normalize(input);
    if input.is_empty() {
        return false;
    }
    word.secondary_meanings
        .iter()
        .chain(word.meanings.iter())
        .any(|meaning| {
            let candidate = normalize(meaning);
            !candidate.is_empty()
                && (input == candidate
                    || (candidate.chars().count() > SUBSTRING_MIN_CHARS
                        && input.contains(&candidate)))
        })
}

/// NFKC first so full-width input compares cleanly, then trim + lowercase.
fn normalize(s: &str) -> String {
    s.nfkc().collect::<String>().trim().to_lowercase()
}
