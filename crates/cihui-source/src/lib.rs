mod client;
mod decode;

pub use client::{PushAction, WordSourceClient};
pub use decode::decode_payload;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("word source returned HTTP {0}")]
    Status(u16),
}
