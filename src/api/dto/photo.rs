//! Populated photo DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::UserSummaryResponse;
use crate::models::{PopulatedComment, PopulatedPhoto};

fn format_date(date_time: DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Comment with its author embedded as a user summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment: String,
    pub date_time: String,
    pub user: UserSummaryResponse,
}

impl From<PopulatedComment> for CommentResponse {
    fn from(comment: PopulatedComment) -> Self {
        Self {
            id: comment.id.to_hex(),
            comment: comment.comment,
            date_time: format_date(comment.date_time),
            user: comment.user.into(),
        }
    }
}

/// Photo with its fully populated comment list.
#[derive(Debug, Serialize, ToSchema)]
pub struct PhotoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    pub date_time: String,
    pub comments: Vec<CommentResponse>,
}

impl From<PopulatedPhoto> for PhotoResponse {
    fn from(photo: PopulatedPhoto) -> Self {
        Self {
            id: photo.id.to_hex(),
            user_id: photo.user_id.to_hex(),
            file_name: photo.file_name,
            date_time: format_date(photo.date_time),
            comments: photo.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;
    use chrono::TimeZone;

    use crate::models::UserSummary;

    use super::*;

    #[test]
    fn test_photo_wire_shape() {
        let photo = PopulatedPhoto {
            id: ObjectId::from_bytes([1; 12]),
            user_id: ObjectId::from_bytes([2; 12]),
            file_name: "ripple.jpg".to_string(),
            date_time: Utc.with_ymd_and_hms(2013, 11, 18, 18, 2, 0).unwrap(),
            comments: vec![PopulatedComment {
                id: ObjectId::from_bytes([3; 12]),
                comment: "nice shot".to_string(),
                date_time: Utc.with_ymd_and_hms(2013, 11, 19, 7, 15, 0).unwrap(),
                user: UserSummary {
                    id: ObjectId::from_bytes([4; 12]),
                    first_name: "Robert".to_string(),
                    last_name: "Capa".to_string(),
                },
            }],
        };

        let json = serde_json::to_value(PhotoResponse::from(photo)).unwrap();
        assert_eq!(json["_id"], "010101010101010101010101");
        assert_eq!(json["user_id"], "020202020202020202020202");
        assert_eq!(json["file_name"], "ripple.jpg");
        assert_eq!(json["date_time"], "2013-11-18T18:02:00.000Z");
        // The raw author reference is replaced by the embedded summary
        assert!(json["comments"][0].get("user_id").is_none());
        assert_eq!(json["comments"][0]["user"]["first_name"], "Robert");
        assert_eq!(json["comments"][0]["user"]["_id"], "040404040404040404040404");
    }
}
