use std::time::Duration;

use cihui_types::{SessionResult, Word};
use rand::Rng;
use rand::seq::SliceRandom;

use super::Phase;
use crate::results::ResultAggregator;
use crate::sampler::pick_meaning;
use crate::session::{MATCH_FLIPBACK_DELAY, MATCH_REVEAL_DELAY, PracticeSession};

#[derive(Debug, Clone)]
pub enum CardFace {
    Headword(String),
    Meaning(String),
}

impl CardFace {
    pub fn label(&self) -> &str {
        match self {
            CardFace::Headword(s) | CardFace::Meaning(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub word_id: String,
    pub face: CardFace,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Out of range, already matched/face-up, or two cards pending.
    Ignored,
    /// First card of a prospective pair turned up.
    Revealed,
    /// Second card up; caller schedules `resolve()` after `delay`.
    Pair { matched: bool, delay: Duration },
}

/// Pair-matching grid: one headword card and one meaning card per session
/// word, shuffled once at setup. At most two unmatched cards are face-up
/// at any time; a third flip while two are pending is ignored.
pub struct MatchEngine {
    words: Vec<Word>,
    cards: Vec<Card>,
    face_up: Vec<usize>,
    solved_pairs: u32,
    results: ResultAggregator,
    phase: Phase,
}

impl MatchEngine {
    pub fn new<R: Rng>(session: PracticeSession, rng: &mut R) -> Self {
        let words = session.words;
        let mut cards = Vec::with_capacity(words.len() * 2);
        for word in &words {
            cards.push(Card {
                word_id: word.id.clone(),
                face: CardFace::Headword(word.headword.clone()),
                face_up: false,
                matched: false,
            });
            cards.push(Card {
                word_id: word.id.clone(),
                face: CardFace::Meaning(pick_meaning(word, rng)),
                face_up: false,
                matched: false,
            });
        }
        cards.shuffle(rng);

        let phase = if words.is_empty() {
            Phase::Finished
        } else {
            Phase::Running
        };
        Self {
            words,
            cards,
            face_up: Vec::new(),
            solved_pairs: 0,
            results: ResultAggregator::new(),
            phase,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn solved_pairs(&self) -> u32 {
        self.solved_pairs
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.phase == Phase::Finished || self.face_up.len() >= 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if card.matched || card.face_up {
            return FlipOutcome::Ignored;
        }
        card.face_up = true;
        self.face_up.push(index);

        if self.face_up.len() < 2 {
            return FlipOutcome::Revealed;
        }
        let matched = self.pending_ids_agree();
        let delay = if matched {
            MATCH_REVEAL_DELAY
        } else {
            MATCH_FLIPBACK_DELAY
        };
        FlipOutcome::Pair { matched, delay }
    }

    /// Apply the pending pair once its delay has elapsed: mark both cards
    /// matched, or flip both back. Finished when every pair is solved.
    pub fn resolve(&mut self) -> Phase {
        if self.face_up.len() != 2 {
            return self.phase;
        }
        let matched = self.pending_ids_agree();
        let pending = std::mem::take(&mut self.face_up);

        if matched {
            let word_id = self.cards[pending[0]].word_id.clone();
            for &i in &pending {
                self.cards[i].face_up = false;
                self.cards[i].matched = true;
            }
            self.solved_pairs += 1;
            if let Some(word) = self.words.iter().find(|w| w.id == word_id).cloned() {
                self.results.record(&word, true);
            }
            if self.solved_pairs as usize == self.words.len() {
                self.phase = Phase::Finished;
            }
        } else {
            for &i in &pending {
                self.cards[i].face_up = false;
                let word_id = self.cards[i].word_id.clone();
                if let Some(word) = self.words.iter().find(|w| w.id == word_id).cloned() {
                    self.results.record(&word, false);
                }
            }
        }
        self.phase
    }

    pub fn into_result(self) -> SessionResult {
        let total = Some(self.words.len() as u32);
        self.results.finalize(self.solved_pairs, total)
    }

    fn pending_ids_agree(&self) -> bool {
        self.face_up.len() == 2
            && self.cards[self.face_up[0]].word_id == self.cards[self.face_up[1]].word_id
    }
}
