//! Diagnostic endpoint DTOs.

use chrono::SecondsFormat;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SchemaInfo;
use crate::services::CollectionCounts;

/// Schema info wire format.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaInfoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: String,
    pub load_date_time: String,
}

impl From<SchemaInfo> for SchemaInfoResponse {
    fn from(info: SchemaInfo) -> Self {
        Self {
            id: info.id.to_hex(),
            version: info.version,
            load_date_time: info
                .load_date_time
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Collection population counts, keyed by collection name.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountsResponse {
    pub user: u64,
    pub photo: u64,
    #[serde(rename = "schemaInfo")]
    pub schema_info: u64,
}

impl From<CollectionCounts> for CountsResponse {
    fn from(counts: CollectionCounts) -> Self {
        Self {
            user: counts.user,
            photo: counts.photo,
            schema_info: counts.schema_info,
        }
    }
}
