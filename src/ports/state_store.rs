//! State store port - best-effort key-value persistence.
//!
//! Values are JSON strings under well-known keys. Absence or corruption of
//! a value must fall back to documented defaults silently; storage is never
//! allowed to crash the session.

use async_trait::async_trait;

/// Well-known persistence keys.
pub mod keys {
    /// Remaining free session seconds (`u32` as JSON number).
    pub const FREE_SECONDS: &str = "free_seconds";
    /// Active character (JSON `Character`).
    pub const CURRENT_CHARACTER: &str = "current_character";
    /// Customization profile (JSON `CustomizationProfile`).
    pub const CUSTOMIZATION: &str = "customization";
    /// Whether the one-shot welcome has been shown (`bool`).
    pub const WELCOMED: &str = "welcomed";
}

/// Errors that can occur during state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize value: {0}")]
    SerializationFailed(String),
}

/// Port for persisting and loading named session values.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads the raw JSON string stored under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns `StateStoreError` if the backing store cannot be read;
    /// callers degrade to defaults either way.
    async fn get(&self, key: &str) -> Result<Option<String>, StateStoreError>;

    /// Stores a raw JSON string under a key, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StateStoreError` if the write fails; callers log and
    /// continue.
    async fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError>;
}
