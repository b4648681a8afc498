use cihui_types::Word;
use serde_json::{Value, json};

use crate::{CultureTip, Nuance, NuanceExample, Tutor, TutorError};

/// Tutor backed by a `generateContent`-style HTTP endpoint.
#[derive(Clone)]
pub struct HttpTutor {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HttpTutor {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    /// One round trip: send parts, return the first candidate's text.
    async fn generate(&self, parts: Value) -> Result<String, TutorError> {
        if self.api_key.is_empty() {
            return Err(TutorError::MissingApiKey);
        }

        let body = json!({ "contents": [{ "parts": parts }] });
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TutorError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(TutorError::Api(format!("HTTP {}", response.status())));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::MalformedResponse(e.to_string()))?;

        json["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].get(0))
            .and_then(|p| p["text"].as_str())
            .map(str::to_string)
            .ok_or_else(|| TutorError::MalformedResponse("no candidate text".to_string()))
    }
}

#[async_trait::async_trait]
impl Tutor for HttpTutor {
    async fn explain(&self, word: &Word) -> Result<Nuance, TutorError> {
        let prompt = format!(
            "Explain the nuance of the HSK {} word {} ({}) meaning {:?}. \
             Answer as JSON: {{\"summary\": \"...\", \"examples\": \
             [{{\"hanzi\": \"...\", \"pinyin\": \"...\", \"meaning\": \"...\"}}]}}",
            word.level,
            word.headword,
            word.romanization,
            word.meanings,
        );
        let text = self.generate(json!([{ "text": prompt }])).await?;
        parse_nuance(&text)
    }

    async fn recognize(&self, image_base64: &str) -> Result<Vec<String>, TutorError> {
        let parts = json!([
            { "text": "List every distinct Chinese text fragment visible in \
                       this photo, one per line, nothing else." },
            { "inline_data": { "mime_type": "image/jpeg", "data": image_base64 } },
        ]);
        let text = self.generate(parts).await?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn culture_tip(&self, word: &Word) -> Result<CultureTip, TutorError> {
        let prompt = format!(
            "Give one short Chinese culture tip related to the word {} ({}). \
             Answer as JSON: {{\"tip\": \"...\", \"pinyin\": \"...\", \
             \"translation\": \"...\"}}",
            word.headword, word.romanization,
        );
        let text = self.generate(json!([{ "text": prompt }])).await?;
        parse_culture_tip(&text)
    }
}

/// Models wrap JSON answers in code fences more often than not.
fn strip_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

fn parse_nuance(text: &str) -> Result<Nuance, TutorError> {
    let value: Value = serde_json::from_str(strip_fences(text))
        .map_err(|e| TutorError::MalformedResponse(e.to_string()))?;

    let summary = value["summary"]
        .as_str()
        .ok_or_else(|| TutorError::MalformedResponse("missing summary".to_string()))?
        .to_string();

    let examples = value["examples"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| {
                    Some(NuanceExample {
                        hanzi: e["hanzi"].as_str()?.to_string(),
                        pinyin: e["pinyin"].as_str().unwrap_or_default().to_string(),
                        meaning: e["meaning"].as_str().unwrap_or_default().to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Nuance { summary, examples })
}

fn parse_culture_tip(text: &str) -> Result<CultureTip, TutorError> {
    let value: Value = serde_json::from_str(strip_fences(text))
        .map_err(|e| TutorError::MalformedResponse(e.to_string()))?;

    let tip = value["tip"]
        .as_str()
        .ok_or_else(|| TutorError::MalformedResponse("missing tip".to_string()))?
        .to_string();

    Ok(CultureTip {
        tip,
        pinyin: value["pinyin"].as_str().unwrap_or_default().to_string(),
        translation: value["translation"].as_str().unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_culture_tip, parse_nuance};

    #[test]
    fn parses_fenced_nuance_json() {
        let text = "```json\n{\"summary\": \"casual greeting\", \"examples\": \
                    [{\"hanzi\": \"你好吗\", \"pinyin\": \"nǐ hǎo ma\", \
                    \"meaning\": \"how are you\"}]}\n```";
        let nuance = parse_nuance(text).unwrap();
        assert_eq!(nuance.summary, "casual greeting");
        assert_eq!(nuance.examples.len(), 1);
        assert_eq!(nuance.examples[0].hanzi, "你好吗");
    }

    #[test]
    fn malformed_payloads_are_reported_not_faked() {
        assert!(parse_nuance("not json").is_err());
        assert!(parse_culture_tip("{\"pinyin\": \"x\"}").is_err());
    }
}
