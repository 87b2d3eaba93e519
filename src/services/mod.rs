//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod diagnostics_service;
mod photo_service;
mod user_service;

pub use diagnostics_service::{CollectionCounts, DiagnosticsService};
pub use photo_service::PhotoService;
pub use user_service::UserService;

use bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying store handle is reference counted.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub photos: PhotoService,
    pub diagnostics: DiagnosticsService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    ///
    /// # Arguments
    /// * `repos` - The repository aggregate
    /// * `lookup_concurrency` - Bound on concurrent author lookups per request
    pub fn new(repos: Repositories, lookup_concurrency: usize) -> Self {
        Self {
            users: UserService::new(repos.users.clone()),
            photos: PhotoService::new(
                repos.photos.clone(),
                repos.users.clone(),
                lookup_concurrency,
            ),
            diagnostics: DiagnosticsService::new(repos.users, repos.photos, repos.schema_infos),
        }
    }
}

/// Parses a path identifier into an object id.
///
/// A malformed identifier is a client fault, not a store fault.
pub(crate) fn parse_object_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::bad_request(format!("invalid identifier '{}'", raw)))
}
