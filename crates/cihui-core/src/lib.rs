pub mod engine;
pub mod error;
pub mod hunter;
pub mod index;
pub mod results;
pub mod sampler;
pub mod session;

pub use error::SessionError;
pub use index::WordIndex;
pub use session::{ModeSpec, PracticeSession, build_session, eligible_pool};

#[cfg(test)]
mod tests;
