use thiserror::Error;

/// Application-wide error type covering every failure the service reports.
///
/// The taxonomy is deliberately small: a referenced record is absent
/// (`NotFound`), the client sent a malformed request (`BadRequest`,
/// `Validation`), or something on our side went wrong (`Database`,
/// `Configuration`, `Internal`). All store-origin faults are server faults.
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced entity absent from the store
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Malformed identifier or otherwise invalid request
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Store operation error with operation context
    #[error("Store operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures and violated invariants
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Creates a `NotFound` error for the given entity and lookup key.
    pub fn not_found(
        entity: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        AppError::NotFound {
            entity: entity.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a `BadRequest` error with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    /// Wraps a store driver error with the name of the failed operation.
    pub fn database(
        operation: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        AppError::Database {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Creates an `Internal` error from any error value.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            source: source.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        AppError::Configuration {
            key: "configuration".to_string(),
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = AppError::not_found("user", "_id", "abc123");
        assert_eq!(
            error.to_string(),
            "Resource not found: user with _id=abc123"
        );
    }

    #[test]
    fn test_bad_request_display() {
        let error = AppError::bad_request("invalid identifier 'nope'");
        assert_eq!(error.to_string(), "Bad request: invalid identifier 'nope'");
    }

    #[test]
    fn test_database_preserves_source() {
        let error = AppError::database("find user by id", anyhow::anyhow!("connection reset"));
        let source = std::error::Error::source(&error).expect("source");
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn test_internal_from_anyhow() {
        let error: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(error, AppError::Internal { .. }));
    }
}
