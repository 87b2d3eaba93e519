//! Populated photo feed handler.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::api::doc::PHOTO_TAG;
use crate::api::dto::PhotoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates the photo routes.
pub fn photo_routes() -> Router<AppState> {
    Router::new().route("/photosOfUser/{id}", get(photos_of_user))
}

/// GET /photosOfUser/:id - Returns the user's photos with all comments and
/// each comment's author populated.
///
/// The response is emitted only once every author lookup has settled; a
/// single failing lookup fails the whole request.
#[utoipa::path(
    get,
    path = "/photosOfUser/{id}",
    params(
        ("id" = String, Path, description = "Owning user's object id")
    ),
    responses(
        (status = 200, description = "Populated photos in store order", body = [PhotoResponse]),
        (status = 400, description = "Malformed identifier", body = crate::api::dto::ErrorResponse),
        (status = 404, description = "User has no photos or a comment author is missing", body = crate::api::dto::ErrorResponse),
        (status = 500, description = "Store error", body = crate::api::dto::ErrorResponse)
    ),
    tag = PHOTO_TAG
)]
pub async fn photos_of_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PhotoResponse>>, AppError> {
    let photos = state.services.photos.photos_of_user(&id).await?;
    Ok(Json(photos.into_iter().map(PhotoResponse::from).collect()))
}
