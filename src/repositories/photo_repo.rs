//! Photo repository for document store lookups.

use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;

use crate::db::Store;
use crate::error::AppError;
use crate::models::Photo;

/// Photo repository holding a store handle.
#[derive(Clone)]
pub struct PhotoRepository {
    store: Store,
}

impl PhotoRepository {
    /// Creates a new PhotoRepository with the given store handle.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Finds all photos owned by the given user, in store iteration order.
    ///
    /// No re-sort is imposed here; downstream consumers rely on this order
    /// being the store's.
    pub async fn find_by_owner(&self, owner: &ObjectId) -> Result<Vec<Photo>, AppError> {
        let cursor = self
            .store
            .photos()
            .find(doc! { "user_id": *owner })
            .await
            .map_err(|e| AppError::database("find photos by owner", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::database("collect photos", e))
    }

    /// Counts all photo documents.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store
            .photos()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::database("count photos", e))
    }
}
