use std::env;

use serde::{Deserialize, Serialize};

fn default_session_size() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PracticeConfig {
    /// Word count used when a surface requests `Count(0)`.
    #[serde(default = "default_session_size")]
    pub default_session_size: usize,
}

impl PracticeConfig {
    pub fn new() -> Self {
        let default_session_size = env::var("DEFAULT_SESSION_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_size);

        Self {
            default_session_size,
        }
    }
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            default_session_size: default_session_size(),
        }
    }
}
