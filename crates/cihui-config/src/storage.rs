use std::env;

use serde::{Deserialize, Serialize};

fn default_favorites_path() -> String {
    "cihui-favorites.json".to_string()
}

/// Favorites persistence: one namespaced file, loaded once at startup and
/// rewritten in full on every toggle.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_favorites_path")]
    pub favorites_path: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let favorites_path =
            env::var("FAVORITES_PATH").unwrap_or_else(|_| default_favorites_path());

        Self { favorites_path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_path: default_favorites_path(),
        }
    }
}
