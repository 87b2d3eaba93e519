//! Diagnostics service backing the `/test` endpoints.

use crate::error::{AppError, AppResult};
use crate::models::SchemaInfo;
use crate::repositories::{PhotoRepository, SchemaInfoRepository, UserRepository};

/// Population counts of the primary collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub user: u64,
    pub photo: u64,
    pub schema_info: u64,
}

/// Service for store connectivity diagnostics.
#[derive(Clone)]
pub struct DiagnosticsService {
    users: UserRepository,
    photos: PhotoRepository,
    schema_infos: SchemaInfoRepository,
}

impl DiagnosticsService {
    /// Creates a new DiagnosticsService from the involved repositories.
    pub fn new(
        users: UserRepository,
        photos: PhotoRepository,
        schema_infos: SchemaInfoRepository,
    ) -> Self {
        Self {
            users,
            photos,
            schema_infos,
        }
    }

    /// Returns the schema info record.
    ///
    /// At least one record must exist; its absence means the store was never
    /// seeded and is an internal error.
    pub async fn schema_info(&self) -> AppResult<SchemaInfo> {
        self.schema_infos.find_current().await?.ok_or_else(|| {
            tracing::error!("schema info record is missing");
            AppError::internal(anyhow::anyhow!("schema info record is missing"))
        })
    }

    /// Counts the user, photo and schema info collections.
    ///
    /// The three count queries run independently; if any of them fails the
    /// whole operation fails and no partial counts are returned.
    pub async fn collection_counts(&self) -> AppResult<CollectionCounts> {
        let (user, photo, schema_info) = tokio::try_join!(
            self.users.count(),
            self.photos.count(),
            self.schema_infos.count()
        )?;

        Ok(CollectionCounts {
            user,
            photo,
            schema_info,
        })
    }
}
