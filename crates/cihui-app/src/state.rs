use cihui_config::Config;
use cihui_core::WordIndex;
use tokio::sync::RwLock;

use crate::favorites::Favorites;

pub struct AppState {
    pub config: RwLock<Config>,
    pub index: RwLock<WordIndex>,
    pub favorites: RwLock<Favorites>,
}

impl AppState {
    pub fn new(config: Config, favorites: Favorites) -> Self {
        Self {
            config: RwLock::new(config),
            index: RwLock::new(WordIndex::empty()),
            favorites: RwLock::new(favorites),
        }
    }
}
