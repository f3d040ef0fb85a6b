//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Initial quota must be greater than zero")]
    InvalidQuota,

    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("Tick cost must be greater than zero")]
    InvalidTickCost,

    #[error("Per-message cost enabled but zero")]
    InvalidMessageCost,

    #[error("Reply delay range is inverted (min > max)")]
    InvalidDelayRange,
}
