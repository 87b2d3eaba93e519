//! Root status endpoint.

use axum::{Router, extract::State, routing::get};

use crate::state::AppState;

/// Creates the root route.
pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - Plain-text status string, good for checking the server is up.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
    tag = crate::api::doc::DIAGNOSTIC_TAG
)]
pub async fn index(State(state): State<AppState>) -> String {
    format!(
        "{} {} data-access API is running",
        state.application.name, state.application.version
    )
}
