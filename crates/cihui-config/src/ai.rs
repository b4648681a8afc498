use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        .to_string()
}

/// AI collaborator settings: word nuance, image recognition, culture tips.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl AiConfig {
    pub fn new() -> Self {
        let api_key = env::var("AI_API_KEY").unwrap_or_default();
        let api_url = env::var("AI_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            enabled: !api_key.is_empty(),
            api_key,
            api_url,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
