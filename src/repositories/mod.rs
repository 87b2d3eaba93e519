//! Repository layer for data access operations.
//!
//! Provides read-only queries against the document store collections.

mod photo_repo;
mod schema_info_repo;
mod user_repo;

pub use photo_repo::PhotoRepository;
pub use schema_info_repo::SchemaInfoRepository;
pub use user_repo::UserRepository;

use crate::db::Store;

/// Aggregates all repositories for convenient access.
///
/// Since `Store` is internally reference counted, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub photos: PhotoRepository,
    pub schema_infos: SchemaInfoRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(store: Store) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            photos: PhotoRepository::new(store.clone()),
            schema_infos: SchemaInfoRepository::new(store),
        }
    }
}
