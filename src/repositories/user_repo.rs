//! User repository for document store lookups.

use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;

use crate::db::Store;
use crate::error::AppError;
use crate::models::User;

/// User repository holding a store handle.
///
/// Cloning is cheap since `Store` is internally reference counted.
#[derive(Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    /// Creates a new UserRepository with the given store handle.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Finds a user by object id.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.store
            .users()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::database("find user by id", e))
    }

    /// Lists all users in store iteration order.
    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .store
            .users()
            .find(doc! {})
            .await
            .map_err(|e| AppError::database("list users", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::database("collect users", e))
    }

    /// Counts all user documents.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store
            .users()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::database("count users", e))
    }
}
