//! CLI argument parsing with clap
//!
//! Defines the command-line interface structure, including all commands,
//! arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Read-only data-access API for the photostream photo-sharing application
#[derive(Parser, Debug)]
#[command(name = "photostream")]
#[command(about = "Read-only data-access API for the photostream photo-sharing application")]
#[command(long_about = "
Photostream serves the user, photo, and diagnostic endpoints of the photo
application over HTTP, backed by a MongoDB document store.

EXAMPLES:
    # Start the server with default configuration
    photostream serve

    # Start server on custom host and port
    photostream serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    photostream --config /path/to/config.toml serve

    # Check configuration without starting the server
    photostream serve --dry-run
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file (TOML) to use instead of the
    /// layered configuration directory. The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Forces a specific environment configuration instead of reading
    /// PHOTOSTREAM_APP_ENV.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level forced by --verbose/--quiet, if either was given.
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server (default)
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept
        /// connections from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on (1-65535)
        #[arg(long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment override accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_bare_invocation() {
        let cli = Cli::try_parse_from(["photostream"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "photostream",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .expect("parses");

        match cli.command {
            Some(Commands::Serve { host, port, dry_run }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(!dry_run);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Cli::try_parse_from(["photostream", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["photostream", "serve", "--port", "0"]).is_err());
    }

    #[test]
    fn test_log_level_override() {
        let verbose = Cli::try_parse_from(["photostream", "-v"]).unwrap();
        assert_eq!(verbose.log_level_override(), Some("debug"));

        let quiet = Cli::try_parse_from(["photostream", "-q"]).unwrap();
        assert_eq!(quiet.log_level_override(), Some("error"));

        let neither = Cli::try_parse_from(["photostream"]).unwrap();
        assert_eq!(neither.log_level_override(), None);
    }
}
