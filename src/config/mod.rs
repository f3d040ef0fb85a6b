//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `HEART` prefix
//! and nested values use `__` (double underscore) as separator.
//!
//! # Example
//!
//! ```no_run
//! use heart_companion::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Initial quota: {}s", config.session.initial_quota_secs);
//! ```

mod error;
mod reply;
mod session;

pub use error::{ConfigError, ValidationError};
pub use reply::ReplyDelayConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Session quota configuration.
    pub session: SessionConfig,

    /// Staged reply delay configuration.
    pub reply: ReplyDelayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `HEART` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HEART__SESSION__INITIAL_QUOTA_SECS=600` -> `session.initial_quota_secs = 600`
    /// - `HEART__REPLY__MAX_DELAY_MS=700` -> `reply.max_delay_ms = 700`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("HEART").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.session.validate()?;
        self.reply.validate()?;
        Ok(())
    }
}
