// src/record.rs
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The throwaway document written and removed by the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl ProbeRecord {
    /// Fresh record with a client-generated id, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        ProbeRecord {
            id: ObjectId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn to_extended_json(&self) -> Result<serde_json::Value, bson::ser::Error> {
        Ok(bson::to_bson(self)?.into_relaxed_extjson())
    }
}
