pub mod events;
pub mod types;

pub use events::{AppEvent, CardView, HuntView, NuanceView, RoundView};
pub use types::{Level, PracticeMode, SessionResult, SessionSize, Word};
