//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, validates configuration and exits without
    ///   starting the server
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            self.validate_only()
        } else {
            Server::new(self.config).run().await?;
            Ok(())
        }
    }

    /// Validate configuration without starting the server
    fn validate_only(&self) -> AppResult<()> {
        self.config.validate().map_err(Into::<AppError>::into)?;

        println!("Configuration is valid");
        println!("Server would bind to: {}", self.config.server.address());
        println!(
            "Store: database '{}' with at most {} concurrent author lookups",
            self.config.store.database, self.config.store.max_concurrent_lookups
        );

        Ok(())
    }
}
