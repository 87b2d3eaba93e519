//! User projection DTOs.
//!
//! These are the two public views of a user record. Object ids serialize as
//! hex strings under `_id`, matching the wire format the frontend expects.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{User, UserSummary};

/// Summary view of a user: the list endpoint and embedded comment authors.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummaryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_hex(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            first_name: summary.first_name,
            last_name: summary.last_name,
        }
    }
}

/// Detail view of a single user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub occupation: String,
}

impl From<User> for UserDetailResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            first_name: user.first_name,
            last_name: user.last_name,
            location: user.location,
            description: user.description,
            occupation: user.occupation,
        }
    }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;

    use super::*;

    fn user() -> User {
        User {
            id: ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            first_name: "Imogen".to_string(),
            last_name: "Cunningham".to_string(),
            location: "Portland".to_string(),
            description: "botanicals".to_string(),
            occupation: "photographer".to_string(),
        }
    }

    #[test]
    fn test_summary_wire_shape() {
        let json = serde_json::to_value(UserSummaryResponse::from(&user())).unwrap();
        assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["first_name"], "Imogen");
        assert_eq!(json["last_name"], "Cunningham");
        // The summary view must not leak detail fields
        assert!(json.get("location").is_none());
        assert!(json.get("occupation").is_none());
    }

    #[test]
    fn test_detail_wire_shape() {
        let json = serde_json::to_value(UserDetailResponse::from(user())).unwrap();
        assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["location"], "Portland");
        assert_eq!(json["description"], "botanicals");
        assert_eq!(json["occupation"], "photographer");
    }
}
