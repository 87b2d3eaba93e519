//! Configuration validation logic
//!
//! Validation methods for all configuration structures, keeping values within
//! acceptable ranges before the server starts.

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, ServerConfig, Settings, StoreConfig};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl StoreConfig {
    /// Validate store configuration
    ///
    /// # Validation Rules
    /// - URI must be non-empty and use a mongodb scheme
    /// - Database name must be non-empty
    /// - Connect timeout must be greater than 0
    /// - Lookup concurrency must be at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            return Err(ConfigError::validation(
                "store.uri",
                "Store URI is required. Please specify a MongoDB connection string.",
            ));
        }

        if !self.uri.starts_with("mongodb://") && !self.uri.starts_with("mongodb+srv://") {
            return Err(ConfigError::validation(
                "store.uri",
                "Invalid store URI. Expected format: mongodb://host[:port] or mongodb+srv://host",
            ));
        }

        if self.database.is_empty() {
            return Err(ConfigError::validation(
                "store.database",
                "Store database name is required.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "store.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.max_concurrent_lookups == 0 {
            return Err(ConfigError::validation(
                "store.max_concurrent_lookups",
                "Lookup concurrency must be at least 1.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                "Invalid log level. Valid levels are: trace, debug, info, warn, error.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.format",
                "Invalid log format. Valid formats are: pretty, compact, json.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { field, .. } if field == "server.port"));
    }

    #[test]
    fn test_empty_store_uri_rejected() {
        let mut settings = Settings::default();
        settings.store.uri = String::new();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { field, .. } if field == "store.uri"));
    }

    #[test]
    fn test_non_mongodb_scheme_rejected() {
        let mut settings = Settings::default();
        settings.store.uri = "postgres://localhost/photos".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_srv_scheme_accepted() {
        let mut settings = Settings::default();
        settings.store.uri = "mongodb+srv://cluster.example.net".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_lookup_concurrency_rejected() {
        let mut settings = Settings::default();
        settings.store.max_concurrent_lookups = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "store.max_concurrent_lookups"
        ));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logger.level = "loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut settings = Settings::default();
        settings.logger.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }
}
