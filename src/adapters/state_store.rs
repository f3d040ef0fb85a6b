//! State store adapters: in-memory for tests, JSON file for the demo.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::ports::{StateStore, StateStoreError};

/// In-memory key-value store for testing and single-run sessions.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding all values in one JSON object.
///
/// Best effort: a missing or unreadable file starts empty; each put
/// rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStateStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileStateStore {
    /// Opens a store at the given path, loading any existing values.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "state file corrupted; starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    async fn flush(&self, values: &HashMap<String, String>) -> Result<(), StateStoreError> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|err| StateStoreError::SerializationFailed(err.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| StateStoreError::IoError(err.to_string()))
    }
}

#[async_trait]
impl StateStore for JsonFileStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        self.flush(&values).await
    }
}
