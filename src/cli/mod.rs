//! CLI module for photostream
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment};

use crate::config::settings::Settings;

/// Load and merge configuration from CLI arguments
///
/// 1. Load base configuration from files (or the file given with --config)
/// 2. Merge CLI argument overrides
/// 3. Validate the final configuration
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::load(cli)?;
    let settings = merger.merge_cli_args(cli)?;
    Ok(settings)
}

/// Initialize the logger from merged settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    crate::logger::init(&settings.logger)
}
