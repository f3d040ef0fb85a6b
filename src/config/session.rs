//! Session quota configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Session quota configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Full free-time grant in seconds (also the reset amount).
    pub initial_quota_secs: u32,

    /// Cadence of the background countdown tick, in seconds.
    pub tick_interval_secs: u64,

    /// Seconds deducted by each visible tick.
    pub tick_cost_secs: u32,

    /// Seconds deducted per submitted message, when enabled.
    pub message_cost_secs: u32,

    /// Whether the per-message cost model is enabled.
    pub message_cost_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        // 10 minute free trial, 1s deducted every 2s tick, time-based only.
        Self {
            initial_quota_secs: 10 * 60,
            tick_interval_secs: 2,
            tick_cost_secs: 1,
            message_cost_secs: 0,
            message_cost_enabled: false,
        }
    }
}

impl SessionConfig {
    /// Effective per-message cost; zero while the cost model is disabled.
    pub fn effective_message_cost(&self) -> u32 {
        if self.message_cost_enabled {
            self.message_cost_secs
        } else {
            0
        }
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_quota_secs == 0 {
            return Err(ValidationError::InvalidQuota);
        }
        if self.tick_interval_secs == 0 {
            return Err(ValidationError::InvalidTickInterval);
        }
        if self.tick_cost_secs == 0 {
            return Err(ValidationError::InvalidTickCost);
        }
        if self.message_cost_enabled && self.message_cost_secs == 0 {
            return Err(ValidationError::InvalidMessageCost);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quota_is_rejected() {
        let config = SessionConfig {
            initial_quota_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn enabled_cost_model_requires_nonzero_cost() {
        let config = SessionConfig {
            message_cost_enabled: true,
            message_cost_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn effective_cost_is_zero_while_disabled() {
        let config = SessionConfig {
            message_cost_enabled: false,
            message_cost_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.effective_message_cost(), 0);
    }

    #[test]
    fn effective_cost_applies_when_enabled() {
        let config = SessionConfig {
            message_cost_enabled: true,
            message_cost_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.effective_message_cost(), 5);
    }
}
