use std::time::Duration;

use cihui_types::Word;
use serde_json::json;

use crate::SourceError;
use crate::decode::decode_payload;

/// Best-effort word push direction.
#[derive(Debug, Clone, Copy)]
pub enum PushAction {
    Add,
    Delete,
}

impl PushAction {
    fn as_str(&self) -> &'static str {
        match self {
            PushAction::Add => "add",
            PushAction::Delete => "delete",
        }
    }
}

/// Client for the spreadsheet-backed word endpoint. One URL serves both
/// the full-list fetch and the fire-and-forget push.
#[derive(Clone)]
pub struct WordSourceClient {
    base_url: String,
    client: reqwest::Client,
}

impl WordSourceClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { base_url, client }
    }

    pub async fn fetch_words(&self) -> Result<Vec<Word>, SourceError> {
        let response = self.client.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let payload: serde_json::Value = response.json().await?;
        Ok(decode_payload(&payload))
    }

    /// Fail-soft fetch: any failure degrades to an empty collection so the
    /// app starts with "no data" instead of dying.
    pub async fn fetch_words_or_empty(&self) -> Vec<Word> {
        match self.fetch_words().await {
            Ok(words) => {
                tracing::info!(count = words.len(), "word list loaded");
                words
            }
            Err(e) => {
                tracing::warn!("word fetch failed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Best-effort push of a new or deleted word. The response body is not
    /// interpreted; callers spawn this and move on.
    pub async fn push_word(&self, action: PushAction, word: &Word) -> Result<(), SourceError> {
        let payload = json!({
            "action": action.as_str(),
            "word": word,
        });
        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        Ok(())
    }
}
