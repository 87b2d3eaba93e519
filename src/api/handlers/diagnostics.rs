//! Store connectivity diagnostic handlers.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::doc::DIAGNOSTIC_TAG;
use crate::api::dto::{CountsResponse, SchemaInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates the diagnostic routes.
///
/// Routes:
/// - GET /test        - Same as /test/info
/// - GET /test/info   - Schema info record
/// - GET /test/counts - Collection population counts
pub fn diagnostic_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(schema_info))
        .route("/test/info", get(schema_info))
        .route("/test/counts", get(collection_counts))
}

/// GET /test/info - Returns the schema info record.
///
/// Good for testing store connectivity. Fails with 500 when the record is
/// missing or the query errors.
#[utoipa::path(
    get,
    path = "/test/info",
    responses(
        (status = 200, description = "Schema info record", body = SchemaInfoResponse),
        (status = 500, description = "Store error or missing record", body = crate::api::dto::ErrorResponse)
    ),
    tag = DIAGNOSTIC_TAG
)]
pub async fn schema_info(
    State(state): State<AppState>,
) -> Result<Json<SchemaInfoResponse>, AppError> {
    let info = state.services.diagnostics.schema_info().await?;
    Ok(Json(SchemaInfoResponse::from(info)))
}

/// GET /test/counts - Returns the population counts of the collections.
///
/// All three counts are fetched independently; if any count query fails the
/// whole response fails, no partial counts are returned.
#[utoipa::path(
    get,
    path = "/test/counts",
    responses(
        (status = 200, description = "Collection counts", body = CountsResponse),
        (status = 500, description = "A count query failed", body = crate::api::dto::ErrorResponse)
    ),
    tag = DIAGNOSTIC_TAG
)]
pub async fn collection_counts(
    State(state): State<AppState>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = state.services.diagnostics.collection_counts().await?;
    Ok(Json(CountsResponse::from(counts)))
}
