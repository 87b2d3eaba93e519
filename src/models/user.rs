use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User record as stored in the users collection.
///
/// This service never creates, mutates, or deletes user records; the store
/// owns the full lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub occupation: String,
}

/// Summary projection of a user: the list view, and the shape embedded as a
/// comment author in populated photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
