use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Singleton diagnostic record describing the loaded dataset.
///
/// Exactly one instance is expected to exist; the handlers only enforce "at
/// least one". Multiplicity beyond that is a store seeding concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaInfo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub version: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub load_date_time: DateTime<Utc>,
}
