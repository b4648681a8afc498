use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// The favorite-word id set: the only state mutated from multiple
/// surfaces. Loaded once at startup; the full set is rewritten to disk on
/// every successful toggle.
pub struct Favorites {
    path: PathBuf,
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!("favorites file unreadable, starting empty: {e}");
                BTreeSet::new()
            }),
            Err(_) => BTreeSet::new(),
        };
        Self { path, ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Idempotent set toggle keyed by word id: add if absent, remove if
    /// present. Returns whether the word is now a favorite. Words without
    /// an id cannot be favorited.
    pub fn toggle(&mut self, id: &str) -> anyhow::Result<bool> {
        if id.is_empty() {
            anyhow::bail!("word has no id and cannot be favorited");
        }
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    fn persist(&self) -> anyhow::Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.ids)?)?;
        Ok(())
    }
}
