//! CLI argument validation functions
//!
//! Custom validation functions for CLI arguments that go beyond what clap
//! validates automatically.

use std::fs;
use std::path::PathBuf;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a configuration file path exists and is readable
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    if host_str.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host_str.contains(char::is_whitespace) {
        return Err(format!("Host address cannot contain whitespace: '{}'", host_str));
    }

    Ok(host_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port_accepts_valid_range() {
        assert_eq!(validate_port("1"), Ok(1));
        assert_eq!(validate_port("3000"), Ok(3000));
        assert_eq!(validate_port("65535"), Ok(65535));
    }

    #[test]
    fn test_validate_port_rejects_zero_and_garbage() {
        assert!(validate_port("0").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("http").is_err());
    }

    #[test]
    fn test_validate_config_file_path_missing() {
        assert!(validate_config_file_path("/no/such/file.toml").is_err());
    }

    #[test]
    fn test_validate_config_file_path_existing() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let path = file.path().to_str().unwrap();
        assert!(validate_config_file_path(path).is_ok());
    }

    #[test]
    fn test_validate_host_address() {
        assert!(validate_host_address("127.0.0.1").is_ok());
        assert!(validate_host_address("localhost").is_ok());
        assert!(validate_host_address("").is_err());
        assert!(validate_host_address("a host").is_err());
    }
}
