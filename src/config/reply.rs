//! Staged reply delay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Bounds of the randomized pause between "thinking" and "responding".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplyDelayConfig {
    /// Lower bound in milliseconds.
    pub min_delay_ms: u64,

    /// Upper bound in milliseconds (inclusive).
    pub max_delay_ms: u64,
}

impl Default for ReplyDelayConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 400,
            max_delay_ms: 700,
        }
    }
}

impl ReplyDelayConfig {
    /// Returns the bounds as durations.
    pub fn range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }

    /// Validate delay configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ValidationError::InvalidDelayRange);
        }
        Ok(())
    }
}
