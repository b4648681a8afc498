use cihui_types::PracticeMode;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{mode} needs at least {needed} eligible words, pool has {available}")]
    InsufficientPool {
        mode: PracticeMode,
        needed: usize,
        available: usize,
    },

    /// Sentence-Fill specific: the pool has words, but none carries an
    /// example sentence containing its own headword. Surfaced as a
    /// "not enough data" state distinct from a finished session.
    #[error("no words in the pool have a usable example sentence")]
    NoUsableExamples,
}
