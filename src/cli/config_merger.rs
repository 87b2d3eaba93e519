//! Configuration merger for CLI arguments and config files
//!
//! Merges CLI argument overrides with file-based configuration, implementing
//! the configuration precedence logic: CLI arguments beat every file and
//! environment variable source.

use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

use super::parser::{Cli, Commands};

/// Configuration merger that applies CLI overrides on top of loaded settings.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a merger by loading configuration as the CLI arguments direct.
    ///
    /// `--config FILE` loads exactly that file; `--env` forces the
    /// environment layer; otherwise the default layered loading applies.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match (&cli.config, cli.env) {
            (Some(path), _) => ConfigLoader::from_file(path.clone()),
            (None, Some(env)) => ConfigLoader::with_environment(env.into())?,
            (None, None) => ConfigLoader::new()?,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI argument overrides into the base configuration.
    ///
    /// The merged settings are validated before being returned.
    pub fn merge_cli_args(mut self, cli: &Cli) -> Result<Settings, ConfigError> {
        if let Some(Commands::Serve { host, port, .. }) = &cli.command {
            if let Some(host) = host {
                self.base_config.server.host = host.clone();
            }
            if let Some(port) = port {
                self.base_config.server.port = *port;
            }
        }

        if let Some(level) = cli.log_level_override() {
            self.base_config.logger.level = level.to_string();
        }

        self.base_config.validate()?;

        Ok(self.base_config)
    }
}
