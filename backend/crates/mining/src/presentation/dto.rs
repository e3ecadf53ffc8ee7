//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{Record, RecordMetadata};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Request for POST /api/mining/mine
///
/// Absent or null fields decode to their zero value. `metadata` is accepted
/// in any shape and discarded, since the server always overwrites it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MineRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub metadata: Option<IgnoredAny>,
}

/// Response for POST /api/mining/mine
#[derive(Debug, Clone, Serialize)]
pub struct MinedRecordResponse {
    pub from: String,
    pub to: String,
    pub value: i64,
    pub metadata: MetadataResponse,
}

/// Proof-of-work section of [`MinedRecordResponse`]
#[derive(Debug, Clone, Serialize)]
pub struct MetadataResponse {
    #[serde(rename = "IterationCount")]
    pub iteration_count: u64,
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl From<MineRequest> for Record {
    fn from(req: MineRequest) -> Self {
        Record::new(
            req.from.unwrap_or_default(),
            req.to.unwrap_or_default(),
            req.value.unwrap_or_default(),
        )
    }
}

impl From<Record> for MinedRecordResponse {
    fn from(record: Record) -> Self {
        let Record {
            from,
            to,
            value,
            metadata: RecordMetadata {
                iteration_count,
                hash,
            },
        } = record;
        Self {
            from,
            to,
            value,
            metadata: MetadataResponse {
                iteration_count,
                hash,
            },
        }
    }
}
