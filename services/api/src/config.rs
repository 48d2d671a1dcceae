//! Application configuration

use common::{
    FileStore, KeyValueStore, LatencyConfig, MemoryStore, StoreError, StoreResult,
    cache::{RedisConfig, RedisPool},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where collections and the session are persisted
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// Nothing survives the process
    Memory,
    /// A single JSON file at the given path
    File(PathBuf),
    /// A Redis server
    Redis(RedisConfig),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub latency: LatencyConfig,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HOTELQUICK_STORE`: `memory`, `file` or `redis` (default: `file`)
    /// - `HOTELQUICK_STORE_PATH`: file backend path (default: `hotelquick-store.json`)
    /// - `SIMULATED_LATENCY`: see [`LatencyConfig::from_env`]
    /// - `REDIS_URL`, `REDIS_KEY_PREFIX`: see [`RedisConfig::from_env`]
    pub fn from_env() -> StoreResult<Self> {
        let backend = std::env::var("HOTELQUICK_STORE").unwrap_or_else(|_| "file".to_string());

        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "file" => {
                let path = std::env::var("HOTELQUICK_STORE_PATH")
                    .unwrap_or_else(|_| "hotelquick-store.json".to_string());
                StoreBackend::File(PathBuf::from(path))
            }
            "redis" => StoreBackend::Redis(RedisConfig::from_env()?),
            other => {
                return Err(StoreError::Configuration(format!(
                    "Unknown HOTELQUICK_STORE backend: {}",
                    other
                )));
            }
        };

        Ok(AppConfig {
            store,
            latency: LatencyConfig::from_env(),
        })
    }

    /// Open the configured store backend
    pub fn build_store(&self) -> StoreResult<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match &self.store {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::File(path) => Arc::new(FileStore::new(path)),
            StoreBackend::Redis(config) => Arc::new(RedisPool::new(config)?),
        };
        info!("Using {} store backend", store.backend_tag());
        Ok(store)
    }
}
