//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEY_INSIGHTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use survey_insights::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading reference data from {}", config.data.base_path.display());
//! ```

mod data;
mod error;
mod server;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Reference dataset location
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SURVEY_INSIGHTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEY_INSIGHTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SURVEY_INSIGHTS__DATA__BASE_PATH=/srv/data` -> `data.base_path = /srv/data`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEY_INSIGHTS")
                    .separator("__"),
            )
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
        self.server.validate()?;
        self.data.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SURVEY_INSIGHTS__SERVER__PORT");
        env::remove_var("SURVEY_INSIGHTS__SERVER__ENVIRONMENT");
        env::remove_var("SURVEY_INSIGHTS__DATA__BASE_PATH");
        env::remove_var("SURVEY_INSIGHTS__DATA__REQUIRE_ALL_STATUSES");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.data.base_path, PathBuf::from("data"));
        assert!(config.data.require_all_statuses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_INSIGHTS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_INSIGHTS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_data_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_INSIGHTS__DATA__BASE_PATH", "/srv/survey-data");
        env::set_var("SURVEY_INSIGHTS__DATA__REQUIRE_ALL_STATUSES", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.data.base_path, PathBuf::from("/srv/survey-data"));
        assert!(!config.data.require_all_statuses);
    }
}
