use utoipa::OpenApi;

pub const USER_TAG: &str = "User";
pub const PHOTO_TAG: &str = "Photo";
pub const DIAGNOSTIC_TAG: &str = "Diagnostics";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Photostream",
        description = "Read-only data-access API for the photostream photo-sharing application",
    ),
    paths(
        crate::api::handlers::root::index,
        crate::api::handlers::diagnostics::schema_info,
        crate::api::handlers::diagnostics::collection_counts,
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::get_user,
        crate::api::handlers::photos::photos_of_user,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::UserSummaryResponse,
            crate::api::dto::UserDetailResponse,
            crate::api::dto::PhotoResponse,
            crate::api::dto::CommentResponse,
            crate::api::dto::SchemaInfoResponse,
            crate::api::dto::CountsResponse,
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::HealthStatus,
            crate::api::handlers::health::ComponentHealth,
        )
    ),
    tags(
        (name = USER_TAG, description = "User projection endpoints"),
        (name = PHOTO_TAG, description = "Populated photo feed endpoints"),
        (name = DIAGNOSTIC_TAG, description = "Store connectivity diagnostics"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
