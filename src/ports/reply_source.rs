//! Reply source port - provider of raw keyword mappings.
//!
//! The source of the mapping is deliberately unspecified (embedded bank,
//! file, remote); the registry only needs raw JSON per scope. A missing or
//! malformed mapping degrades to an empty reply set at compile time.

use async_trait::async_trait;

use crate::domain::replies::ReplyScope;

/// Errors that can occur while fetching a keyword mapping.
#[derive(Debug, thiserror::Error)]
pub enum ReplySourceError {
    #[error("No keyword mapping for scope '{0}'")]
    NotFound(String),

    #[error("Keyword source unavailable: {0}")]
    Unavailable(String),
}

/// Port for fetching the raw keyword mapping of one scope.
#[async_trait]
pub trait ReplySource: Send + Sync {
    /// Fetches the raw JSON mapping for a scope.
    ///
    /// # Errors
    ///
    /// Returns `ReplySourceError::NotFound` when the scope has no mapping;
    /// callers treat this the same as an empty mapping.
    async fn fetch(&self, scope: &ReplyScope) -> Result<String, ReplySourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_scope() {
        let err = ReplySourceError::NotFound("replies-aoi".to_string());
        assert!(err.to_string().contains("replies-aoi"));
    }

    #[test]
    fn unavailable_carries_reason() {
        let err = ReplySourceError::Unavailable("read error".to_string());
        assert!(err.to_string().contains("read error"));
    }
}
