//! Photo service: assembles the populated photo feed for a user.
//!
//! This is the one component with real composition semantics. For a given
//! user it fetches all photos, then resolves every comment's author with one
//! store lookup per comment. The lookups for all photos and all comments form
//! a single flat batch executed with bounded concurrency, and the response is
//! assembled only after the whole batch has settled.

use std::future::Future;

use bson::oid::ObjectId;
use futures::{StreamExt, stream};

use crate::error::{AppError, AppResult};
use crate::models::{Photo, PopulatedComment, PopulatedPhoto, UserSummary};
use crate::repositories::{PhotoRepository, UserRepository};

use super::parse_object_id;

/// Photo service owning the nested-join assembly.
#[derive(Clone)]
pub struct PhotoService {
    photos: PhotoRepository,
    users: UserRepository,
    lookup_concurrency: usize,
}

impl PhotoService {
    /// Creates a new PhotoService.
    ///
    /// # Arguments
    /// * `photos` - Photo repository
    /// * `users` - User repository used for author lookups
    /// * `lookup_concurrency` - Bound on concurrent author lookups
    pub fn new(photos: PhotoRepository, users: UserRepository, lookup_concurrency: usize) -> Self {
        Self {
            photos,
            users,
            lookup_concurrency: lookup_concurrency.max(1),
        }
    }

    /// Returns the user's photos with every comment's author resolved.
    ///
    /// Photo order is store iteration order and comment order is insertion
    /// order; both are fixed before any lookup runs, so lookup completion
    /// timing can never reorder the output. A single failing lookup fails the
    /// whole request and no partial structure is returned.
    ///
    /// # Errors
    /// - `BadRequest` for a malformed identifier
    /// - `NotFound` when the user has no photos, or a comment references a
    ///   user that no longer exists
    /// - `Database` when any store query fails
    pub async fn photos_of_user(&self, raw_id: &str) -> AppResult<Vec<PopulatedPhoto>> {
        let owner = parse_object_id(raw_id)?;

        let photos = self.photos.find_by_owner(&owner).await?;
        if photos.is_empty() {
            return Err(AppError::not_found("photo", "user_id", raw_id));
        }

        let users = self.users.clone();
        let outcomes = resolve_authors(&photos, self.lookup_concurrency, move |author_id| {
            let users = users.clone();
            async move {
                users
                    .find_by_id(&author_id)
                    .await?
                    .map(|user| UserSummary::from(&user))
                    .ok_or_else(|| {
                        tracing::error!(
                            author_id = %author_id,
                            "comment references a user that does not exist"
                        );
                        AppError::not_found("user", "_id", author_id.to_hex())
                    })
            }
        })
        .await;

        populate(photos, outcomes)
    }
}

/// Author ids of every comment across all photos, in photo order then
/// comment order. Duplicate authors are kept; each comment gets its own
/// lookup.
fn comment_author_ids(photos: &[Photo]) -> Vec<ObjectId> {
    photos
        .iter()
        .flat_map(|photo| photo.comments.iter().map(|comment| comment.user_id))
        .collect()
}

/// Runs one author lookup per comment with bounded concurrency.
///
/// The stream is `buffered`, not `buffer_unordered`: outcomes come back in
/// batch order regardless of when the individual lookups complete. The
/// `collect` is a join barrier, so every lookup settles before this returns,
/// including when an earlier lookup has already failed.
async fn resolve_authors<F, Fut>(
    photos: &[Photo],
    concurrency: usize,
    lookup: F,
) -> Vec<AppResult<UserSummary>>
where
    F: Fn(ObjectId) -> Fut,
    Fut: Future<Output = AppResult<UserSummary>>,
{
    stream::iter(comment_author_ids(photos))
        .map(lookup)
        .buffered(concurrency)
        .collect()
        .await
}

/// Folds the settled lookup outcomes back into the photo structure.
///
/// Runs as a single synchronous pass after the barrier. The first failed
/// outcome in batch order decides the result; everything already assembled is
/// discarded.
fn populate(
    photos: Vec<Photo>,
    outcomes: Vec<AppResult<UserSummary>>,
) -> AppResult<Vec<PopulatedPhoto>> {
    let mut authors = outcomes.into_iter();

    photos
        .into_iter()
        .map(|photo| {
            let comments = photo
                .comments
                .into_iter()
                .map(|comment| {
                    let user = authors
                        .next()
                        .ok_or_else(|| {
                            AppError::internal(anyhow::anyhow!(
                                "author batch shorter than comment count"
                            ))
                        })??;
                    Ok(PopulatedComment {
                        id: comment.id,
                        comment: comment.comment,
                        date_time: comment.date_time,
                        user,
                    })
                })
                .collect::<AppResult<Vec<_>>>()?;

            Ok(PopulatedPhoto {
                id: photo.id,
                user_id: photo.user_id,
                file_name: photo.file_name,
                date_time: photo.date_time,
                comments,
            })
        })
        .collect()
}
