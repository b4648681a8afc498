use std::time::Duration;

use cihui_types::{PracticeMode, SessionResult, Word};
use rand::Rng;
use rand::seq::SliceRandom;

use super::Phase;
use crate::results::ResultAggregator;
use crate::sampler::{distractor_words, pick_meaning};
use crate::session::{ModeSpec, PracticeSession, SPEED_SECONDS};

/// Placeholder masking the headword in a Sentence-Fill prompt.
pub const CLOZE_MARK: &str = "____";

#[derive(Debug, Clone)]
pub enum Prompt {
    /// Quiz / Speed Challenge: show the glyphs, ask for the meaning.
    Headword(String),
    /// Pinyin-reverse: romanization plus one randomly picked meaning as hint.
    Romanization { pinyin: String, hint: String },
    /// Sentence-Fill: first example segment with the headword masked.
    ClozeSentence(String),
}

#[derive(Debug, Clone)]
pub struct ChoiceOption {
    pub word_id: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct ChoiceRound {
    pub target: Word,
    pub prompt: Prompt,
    pub options: Vec<ChoiceOption>,
    pub answered: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct Answered {
    pub correct: bool,
    /// How long the caller should wait before `advance()`. `None` when the
    /// engine already moved on (Speed Challenge has no per-round delay).
    pub delay: Option<Duration>,
}

/// The parametrized multiple-choice state machine behind Quiz, Speed
/// Challenge, Pinyin-reverse and Sentence-Fill. Rounds are strictly
/// sequential; the async shell owns every timer, the engine only reports
/// the delay to schedule.
pub struct ChoiceEngine<R: Rng> {
    mode: PracticeMode,
    spec: ModeSpec,
    words: Vec<Word>,
    pool: Vec<Word>,
    cursor: usize,
    round: Option<ChoiceRound>,
    results: ResultAggregator,
    score: u32,
    rounds_played: u32,
    remaining_secs: Option<u32>,
    phase: Phase,
    rng: R,
}

impl<R: Rng> ChoiceEngine<R> {
    /// Setup. `session` is the already-built practice set, `pool` the wider
    /// collection distractors are drawn from. Callers gate on minimum pool
    /// size before constructing the engine.
    pub fn new(session: PracticeSession, pool: Vec<Word>, rng: R) -> Self {
        let mode = session.mode;
        let mut engine = Self {
            mode,
            spec: ModeSpec::of(mode),
            words: session.words,
            pool,
            cursor: 0,
            round: None,
            results: ResultAggregator::new(),
            score: 0,
            rounds_played: 0,
            remaining_secs: (mode == PracticeMode::Speed).then_some(SPEED_SECONDS),
            phase: Phase::Running,
            rng,
        };
        engine.round = engine.make_round();
        if engine.round.is_none() {
            engine.phase = Phase::Finished;
        }
        engine
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> Option<&ChoiceRound> {
        self.round.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Seconds left on the Speed Challenge clock, `None` for other modes.
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    /// Round cap, `None` for the unbounded Speed Challenge.
    pub fn total(&self) -> Option<u32> {
        match self.mode {
            PracticeMode::Speed => None,
            _ => Some(self.words.len() as u32),
        }
    }

    /// Answer the current round by option index.
    ///
    /// Quiz and Speed accept any member of the target's preferred-meaning
    /// list, so a distractor label that happens to equal one counts too.
    /// Pinyin-reverse and Sentence-Fill compare word ids. Returns `None`
    /// when there is nothing to answer (finished, or round already
    /// resolved and awaiting its advance delay).
    pub fn answer(&mut self, index: usize) -> Option<Answered> {
        if self.phase == Phase::Finished {
            return None;
        }
        let round = self.round.as_mut()?;
        if round.answered.is_some() {
            return None;
        }

        let correct = {
            let option = round.options.get(index)?;
            match self.mode {
                PracticeMode::Quiz | PracticeMode::Speed => round
                    .target
                    .preferred_meanings()
                    .iter()
                    .any(|m| m == &option.label),
                _ => option.word_id == round.target.id,
            }
        };
        round.answered = Some(correct);
        let target = round.target.clone();

        if correct {
            self.score += 1;
        }
        self.rounds_played += 1;
        self.results.record(&target, correct);

        if self.mode == PracticeMode::Speed {
            // next round immediately, sampling with replacement
            self.round = self.make_round();
            Some(Answered {
                correct,
                delay: None,
            })
        } else {
            Some(Answered {
                correct,
                delay: Some(self.spec.advance_delay),
            })
        }
    }

    /// Move past a resolved round once its delay has elapsed. After the
    /// last round this reaches `Finished`.
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Finished || self.mode == PracticeMode::Speed {
            return self.phase;
        }
        if matches!(&self.round, Some(round) if round.answered.is_some()) {
            self.cursor += 1;
            if self.cursor < self.words.len() {
                self.round = self.make_round();
                if self.round.is_none() {
                    self.phase = Phase::Finished;
                }
            } else {
                self.round = None;
                self.phase = Phase::Finished;
            }
        }
        self.phase
    }

    /// One second of the Speed Challenge countdown. The countdown is the
    /// sole authority for ending that mode, independent of round count.
    pub fn tick(&mut self) -> Phase {
        if self.phase == Phase::Finished {
            return self.phase;
        }
        if let Some(remaining) = self.remaining_secs.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.round = None;
                self.phase = Phase::Finished;
            }
        }
        self.phase
    }

    pub fn into_result(self) -> SessionResult {
        let total = self.total();
        self.results.finalize(self.score, total)
    }

    fn make_round(&mut self) -> Option<ChoiceRound> {
        let target = match self.mode {
            PracticeMode::Speed => self.words.choose(&mut self.rng).cloned()?,
            _ => self.words.get(self.cursor).cloned()?,
        };

        let distractor_count = self.spec.option_count.saturating_sub(1);
        let mut options: Vec<ChoiceOption> = Vec::with_capacity(self.spec.option_count);

        match self.mode {
            PracticeMode::Quiz | PracticeMode::Speed => {
                // One meaning per candidate, picked at random. Labels that
                // collide with a correct string for the target are skipped;
                // collisions between distractors are left to the
                // containment rule at evaluation time.
                for word in distractor_words(&target, &self.pool, self.pool.len(), &mut self.rng) {
                    if options.len() == distractor_count {
                        break;
                    }
                    let label = pick_meaning(&word, &mut self.rng);
                    if target.preferred_meanings().iter().any(|m| m == &label) {
                        continue;
                    }
                    options.push(ChoiceOption {
                        word_id: word.id,
                        label,
                    });
                }
                options.push(ChoiceOption {
                    word_id: target.id.clone(),
                    label: pick_meaning(&target, &mut self.rng),
                });
            }
            PracticeMode::Pinyin | PracticeMode::SentenceFill => {
                for word in
                    distractor_words(&target, &self.pool, distractor_count, &mut self.rng)
                {
                    options.push(ChoiceOption {
                        word_id: word.id.clone(),
                        label: word.headword,
                    });
                }
                options.push(ChoiceOption {
                    word_id: target.id.clone(),
                    label: target.headword.clone(),
                });
            }
            PracticeMode::Match | PracticeMode::Write => return None,
        }
        options.shuffle(&mut self.rng);

        let prompt = match self.mode {
            PracticeMode::Quiz | PracticeMode::Speed => Prompt::Headword(target.headword.clone()),
            PracticeMode::Pinyin => Prompt::Romanization {
                pinyin: target.romanization.clone(),
                hint: pick_meaning(&target, &mut self.rng),
            },
            PracticeMode::SentenceFill => Prompt::ClozeSentence(cloze(&target)?),
            PracticeMode::Match | PracticeMode::Write => return None,
        };

        Some(ChoiceRound {
            target,
            prompt,
            options,
            answered: None,
        })
    }
}

/// Mask every literal occurrence of the headword in the word's usable
/// example segment.
fn cloze(word: &Word) -> Option<String> {
    word.usable_example()
        .map(|example| example.replace(word.headword.as_str(), CLOZE_MARK))
}
