use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserSummary;

/// Comment embedded in a photo document.
///
/// `user_id` is a back-reference to the authoring user; it is resolved to an
/// embedded author summary before a comment is surfaced externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub comment: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date_time: DateTime<Utc>,
    pub user_id: ObjectId,
}

/// Photo record with its embedded comment list.
///
/// Comment order is insertion order and is preserved through every
/// transformation in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub file_name: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Photo with every comment author resolved, the output of the nested-join
/// assembly.
#[derive(Debug, Clone)]
pub struct PopulatedPhoto {
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub file_name: String,
    pub date_time: DateTime<Utc>,
    pub comments: Vec<PopulatedComment>,
}

/// Comment with the author reference replaced by an embedded summary.
#[derive(Debug, Clone)]
pub struct PopulatedComment {
    pub id: ObjectId,
    pub comment: String,
    pub date_time: DateTime<Utc>,
    pub user: UserSummary,
}
