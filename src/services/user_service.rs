//! User service for business logic operations.
//!
//! Provides the list and detail views over user records, encapsulating the
//! endpoint contracts on top of the repository layer.

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::UserRepository;

use super::parse_object_id;

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Lists all users in store iteration order.
    ///
    /// A seeded installation always has users, so an empty collection is an
    /// internal error rather than an empty list.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list_all().await?;
        if users.is_empty() {
            tracing::error!("user collection is empty, store was not seeded");
            return Err(AppError::internal(anyhow::anyhow!(
                "user collection is empty"
            )));
        }
        Ok(users)
    }

    /// Gets a user by their raw path identifier.
    ///
    /// # Returns
    /// The user if found, `BadRequest` for a malformed identifier, or
    /// `NotFound` when no user has that id.
    pub async fn get_user(&self, raw_id: &str) -> AppResult<User> {
        let id = parse_object_id(raw_id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("user", "_id", raw_id))
    }
}
