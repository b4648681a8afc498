use std::env;

use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::network::NetworkConfig;
use self::practice::PracticeConfig;
use self::storage::StorageConfig;

pub mod ai;
pub mod network;
pub mod practice;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ai: AiConfig,
    pub practice: PracticeConfig,
    pub storage: StorageConfig,

    /// App event channel capacity
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            network: NetworkConfig::new(),
            ai: AiConfig::new(),
            practice: PracticeConfig::new(),
            storage: StorageConfig::new(),

            channel_capacity,
        }
    }
}
