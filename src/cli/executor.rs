//! Command executor for dispatching CLI commands
//!
//! Entry point for executing CLI commands after parsing and configuration
//! loading. With no subcommand, `serve` is the default.

use crate::config::settings::Settings;
use crate::error::AppResult;

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};

/// Execute a CLI command with the given settings
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
    }
}
