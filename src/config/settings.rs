//! Configuration settings structures for photostream
//!
//! Defines all configuration that can be loaded from TOML files and
//! environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "photostream".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_store_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_store_database() -> String {
    "photostream".to_string()
}

fn default_connect_timeout() -> u64 {
    3
}

fn default_max_concurrent_lookups() -> usize {
    32
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds, applied to every request as a whole.
    /// The author fan-out of the photo feed runs inside this budget.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Document store connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection URI
    #[serde(default = "default_store_uri")]
    pub uri: String,

    /// Database name
    #[serde(default = "default_store_database")]
    pub database: String,

    /// Server selection and connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Upper bound on concurrent author lookups per request.
    /// Caps resource usage against pathological data, for example a user
    /// with many photos that each carry many comments.
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: default_store_uri(),
            database: default_store_database(),
            connect_timeout: default_connect_timeout(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "pretty", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use ANSI colors in console output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Document store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "photostream");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.request_timeout, 30);
        assert_eq!(settings.store.uri, "mongodb://localhost:27017");
        assert_eq!(settings.store.database, "photostream");
        assert_eq!(settings.store.max_concurrent_lookups, 32);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "pretty");
        assert!(settings.logger.colored);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [server]
            port = 8080

            [store]
            database = "photostream_test"
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1"); // default
        assert_eq!(settings.store.database, "photostream_test");
        assert_eq!(settings.store.uri, "mongodb://localhost:27017"); // default
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml_str = r#"
            [application]
            name = "photostream"
            version = "1.2.3"

            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout = 60
            keep_alive_timeout = 120

            [store]
            uri = "mongodb://db-host:27017"
            database = "gallery"
            connect_timeout = 5
            max_concurrent_lookups = 16

            [logger]
            level = "debug"
            format = "json"
            colored = false
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.application.version, "1.2.3");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.request_timeout, 60);
        assert_eq!(settings.store.uri, "mongodb://db-host:27017");
        assert_eq!(settings.store.database, "gallery");
        assert_eq!(settings.store.connect_timeout, 5);
        assert_eq!(settings.store.max_concurrent_lookups, 16);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.logger.format, "json");
        assert!(!settings.logger.colored);
    }
}
