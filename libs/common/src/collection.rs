//! JSON collection adapter
//!
//! A collection is a JSON array of records stored whole under one key. Every
//! read parses the full array and every write serializes and overwrites it,
//! which is only safe with a single client: concurrent writers of the same
//! key lose updates.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::KeyValueStore;

/// JSON adapter over a [`KeyValueStore`]
#[derive(Clone)]
pub struct JsonStore {
    store: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    /// Wrap a key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn inner(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Read a collection, treating an absent key as empty
    pub async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Read a collection, persisting and returning `seed` if the key is absent
    pub async fn read_collection_or_seed<T, F>(&self, key: &str, seed: F) -> StoreResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        if let Some(raw) = self.store.get(key).await? {
            let records: Vec<T> = serde_json::from_str(&raw)?;
            debug!("Read {} records from {}", records.len(), key);
            return Ok(records);
        }

        let records = seed();
        self.write_collection(key, &records).await?;
        info!("Seeded {} with {} records", key, records.len());
        Ok(records)
    }

    /// Overwrite a collection with `records`
    pub async fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(key, &raw).await?;
        debug!("Wrote {} records to {}", records.len(), key);
        Ok(())
    }

    /// Read a single JSON document
    pub async fn read_document<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite a single JSON document
    pub async fn write_document<T: Serialize>(&self, key: &str, document: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(document)?;
        self.store.set(key, &raw).await
    }

    /// Remove whatever is stored under `key`
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        self.store.delete(key).await
    }
}
