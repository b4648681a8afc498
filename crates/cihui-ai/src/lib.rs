use cihui_types::Word;

mod http;

pub use http::HttpTutor;

/// AI collaborator interface: three independent request/response
/// contracts. Each call is asynchronous, independently failable and never
/// gates game-engine state transitions.
#[async_trait::async_trait]
pub trait Tutor: Send + Sync {
    /// Word nuance explanation keyed by headword, romanization, level and
    /// meanings.
    async fn explain(&self, word: &Word) -> Result<Nuance, TutorError>;

    /// Image-to-text recognition: a flat list of recognized fragments.
    async fn recognize(&self, image_base64: &str) -> Result<Vec<String>, TutorError>;

    /// Culture tip for a matched hunt word.
    async fn culture_tip(&self, word: &Word) -> Result<CultureTip, TutorError>;
}

#[derive(Debug, Clone)]
pub struct Nuance {
    pub summary: String,
    pub examples: Vec<NuanceExample>,
}

#[derive(Debug, Clone)]
pub struct NuanceExample {
    pub hanzi: String,
    pub pinyin: String,
    pub meaning: String,
}

#[derive(Debug, Clone)]
pub struct CultureTip {
    pub tip: String,
    pub pinyin: String,
    pub translation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
