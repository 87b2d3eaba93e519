//! Schema info repository.

use bson::doc;

use crate::db::Store;
use crate::error::AppError;
use crate::models::SchemaInfo;

/// Repository for the schema info singleton.
#[derive(Clone)]
pub struct SchemaInfoRepository {
    store: Store,
}

impl SchemaInfoRepository {
    /// Creates a new SchemaInfoRepository with the given store handle.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns the first schema info record, if any exists.
    pub async fn find_current(&self) -> Result<Option<SchemaInfo>, AppError> {
        self.store
            .schema_infos()
            .find_one(doc! {})
            .await
            .map_err(|e| AppError::database("find schema info", e))
    }

    /// Counts all schema info documents.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store
            .schema_infos()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::database("count schema info", e))
    }
}
