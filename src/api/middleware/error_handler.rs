//! Conversion of AppError into HTTP responses.
//!
//! Provides consistent error response formatting across the API: status code
//! mapping, a machine-readable error code, and sanitized messages. Store and
//! internal errors are logged with their full source chain and replaced by a
//! generic client-facing message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - BadRequest → 400 BAD_REQUEST
    /// - Validation → 400 BAD_REQUEST
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound { entity, .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &format!("{} not found", entity)),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "VALIDATION_ERROR",
                    &format!("Validation failed for {}: {}", field, reason),
                ),
            ),
            AppError::Database { operation, source } => {
                tracing::error!(
                    operation = %operation,
                    error = ?source,
                    "Store operation failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("STORE_ERROR", "A store operation failed"),
                )
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = ?source, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("CONFIGURATION_ERROR", "A configuration error occurred"),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = ?source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        // NotFound details are safe to log at debug level only
        if let AppError::NotFound { entity, field, value } = &self {
            tracing::debug!(entity = %entity, field = %field, value = %value, "Resource not found");
        }

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::Database { .. } => "STORE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::not_found("user", "_id", "abc");
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NOT_FOUND");
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = AppError::bad_request("invalid identifier");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "BAD_REQUEST");
    }

    #[test]
    fn test_store_errors_are_server_faults() {
        // Store-origin faults map uniformly to 500, including for the photo
        // feed where the legacy implementation used a client-fault status.
        let error = AppError::database("find photos by owner", anyhow::anyhow!("boom"));
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "STORE_ERROR");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let error = AppError::internal(anyhow::anyhow!("invariant violated"));
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_response_is_sanitized() {
        let error = AppError::internal(anyhow::anyhow!("connection string with credentials"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
