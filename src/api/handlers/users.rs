//! User endpoint handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::api::doc::USER_TAG;
use crate::api::dto::{UserDetailResponse, UserSummaryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates the user routes.
///
/// Routes:
/// - GET /user/list - All users in summary view
/// - GET /user/:id  - One user in detail view
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/list", get(list_users))
        .route("/user/{id}", get(get_user))
}

/// GET /user/list - Returns all users in summary view.
///
/// An empty user collection is an error, not an empty array.
#[utoipa::path(
    get,
    path = "/user/list",
    responses(
        (status = 200, description = "All users in summary view", body = [UserSummaryResponse]),
        (status = 500, description = "Store error or empty collection", body = crate::api::dto::ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummaryResponse>>, AppError> {
    let users = state.services.users.list_users().await?;
    let responses = users.iter().map(UserSummaryResponse::from).collect();
    Ok(Json(responses))
}

/// GET /user/:id - Returns one user in detail view.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = String, Path, description = "User object id")
    ),
    responses(
        (status = 200, description = "User detail view", body = UserDetailResponse),
        (status = 400, description = "Malformed identifier", body = crate::api::dto::ErrorResponse),
        (status = 404, description = "No user with that id", body = crate::api::dto::ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let user = state.services.users.get_user(&id).await?;
    Ok(Json(UserDetailResponse::from(user)))
}
