//! Logger initialization built on tracing-subscriber.
//!
//! The console subscriber is configured from [`LoggerSettings`]: a level
//! filter (env-filter directives are accepted), one of three output formats,
//! and optional ANSI color.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "full" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format '{}'. Valid formats are: pretty, compact, json",
                s
            )),
        }
    }
}

/// Installs the global tracing subscriber from logger settings.
///
/// # Errors
/// Fails when the level filter cannot be parsed or a subscriber has already
/// been installed.
pub fn init(settings: &LoggerSettings) -> anyhow::Result<()> {
    let format: LogFormat = settings
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", settings.level, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
