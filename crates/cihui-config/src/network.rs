use std::env;

use serde::{Deserialize, Serialize};

fn default_word_api_url() -> String {
    "https://sheet.example.com/api/words".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Word source endpoint settings. The same URL serves the full-list fetch
/// and the fire-and-forget word push.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_word_api_url")]
    pub word_api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let word_api_url = env::var("WORD_API_URL").unwrap_or_else(|_| default_word_api_url());

        let request_timeout_secs = env::var("WORD_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Self {
            word_api_url,
            request_timeout_secs,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            word_api_url: default_word_api_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}
