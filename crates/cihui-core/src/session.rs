use std::time::Duration;

use cihui_types::{PracticeMode, SessionSize, Word};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SessionError;

/// Wall-clock budget of one Speed Challenge session, in one-second ticks.
pub const SPEED_SECONDS: u32 = 60;
/// Match mode always plays a fixed grid of this many words (2x cards).
pub const MATCH_SET_SIZE: usize = 6;
/// How long a matched pair stays revealed before it is marked solved.
pub const MATCH_REVEAL_DELAY: Duration = Duration::from_millis(600);
/// How long a mismatched pair stays visible before flipping back.
pub const MATCH_FLIPBACK_DELAY: Duration = Duration::from_millis(900);

/// Per-mode session parameters. Each mode is a configuration value of the
/// shared state machines, not a separate engine hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct ModeSpec {
    pub min_pool: usize,
    pub option_count: usize,
    pub advance_delay: Duration,
}

impl ModeSpec {
    pub fn of(mode: PracticeMode) -> ModeSpec {
        match mode {
            PracticeMode::Quiz => ModeSpec {
                min_pool: 4,
                option_count: 4,
                advance_delay: Duration::from_millis(1500),
            },
            PracticeMode::Speed => ModeSpec {
                min_pool: 4,
                option_count: 4,
                advance_delay: Duration::ZERO,
            },
            PracticeMode::Match => ModeSpec {
                min_pool: MATCH_SET_SIZE,
                option_count: 0,
                advance_delay: Duration::ZERO,
            },
            PracticeMode::Write => ModeSpec {
                min_pool: 5,
                option_count: 0,
                advance_delay: Duration::from_millis(1500),
            },
            PracticeMode::Pinyin => ModeSpec {
                min_pool: 4,
                option_count: 4,
                advance_delay: Duration::from_millis(1200),
            },
            PracticeMode::SentenceFill => ModeSpec {
                min_pool: 4,
                option_count: 4,
                advance_delay: Duration::from_millis(2000),
            },
        }
    }
}

/// A derived, ephemeral practice set. Discarded when the mode exits or
/// restarts, never persisted.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    pub mode: PracticeMode,
    pub words: Vec<Word>,
}

/// The subset of `pool` a mode may draw targets from. Only Sentence-Fill
/// narrows the pool: its words must carry an example sentence containing
/// their own headword.
pub fn eligible_pool(pool: &[Word], mode: PracticeMode) -> Vec<Word> {
    match mode {
        PracticeMode::SentenceFill => pool
            .iter()
            .filter(|w| w.usable_example().is_some())
            .cloned()
            .collect(),
        _ => pool.to_vec(),
    }
}

/// Derive a bounded, shuffled practice set from `pool`.
///
/// Eligibility and the minimum-pool gate run here, before any engine sees
/// the session; engines themselves assume a well-sized pool.
pub fn build_session<R: Rng>(
    pool: &[Word],
    mode: PracticeMode,
    size: SessionSize,
    rng: &mut R,
) -> Result<PracticeSession, SessionError> {
    let mut words = eligible_pool(pool, mode);
    let spec = ModeSpec::of(mode);

    if mode == PracticeMode::SentenceFill && words.is_empty() && !pool.is_empty() {
        return Err(SessionError::NoUsableExamples);
    }
    if words.len() < spec.min_pool {
        return Err(SessionError::InsufficientPool {
            mode,
            needed: spec.min_pool,
            available: words.len(),
        });
    }

    words.shuffle(rng);
    match size {
        SessionSize::Count(n) => words.truncate(n.max(1)),
        SessionSize::All => {}
    }
    if mode == PracticeMode::Match {
        words.truncate(MATCH_SET_SIZE);
    }

    Ok(PracticeSession { mode, words })
}
