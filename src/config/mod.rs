//! Configuration management for photostream
//!
//! Provides layered configuration loading:
//! 1. `default.toml` - base defaults
//! 2. `{environment}.toml` - environment-specific overrides
//! 3. `local.toml` - local development overrides (not committed)
//! 4. `PHOTOSTREAM_*` environment variables (highest priority)

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, ServerConfig, Settings, StoreConfig};
