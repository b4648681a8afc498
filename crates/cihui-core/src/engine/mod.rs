pub mod choice;
pub mod matching;
pub mod write;

pub use choice::{Answered, ChoiceEngine, ChoiceOption, ChoiceRound, Prompt};
pub use matching::{Card, CardFace, FlipOutcome, MatchEngine};
pub use write::WriteEngine;

/// Shared engine lifecycle. Setup is the constructor; `Finished` is
/// terminal and irreversible, the only way back is a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Finished,
}
