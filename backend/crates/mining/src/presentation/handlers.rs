//! HTTP Handlers

use crate::domain::entities::Record;
use crate::domain::miner::RecordMiner;
use crate::error::{MiningError, MiningResult};
use crate::presentation::dto::{MineRequest, MinedRecordResponse};
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppResult;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Shared state for mining handlers
#[derive(Clone)]
pub struct MiningAppState<M>
where
    M: RecordMiner + Clone + Send + Sync + 'static,
{
    pub miner: Arc<M>,
}

/// POST /api/mining/mine
///
/// Exactly one response per request: 200 with the mined record, 400 for an
/// unreadable or malformed body, 408 when the deadline wins, 500 on internal
/// failure. Error responses have an empty body.
pub async fn mine_record<M>(
    State(state): State<MiningAppState<M>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<impl IntoResponse>
where
    M: RecordMiner + Clone + Send + Sync + 'static,
{
    let body = body.map_err(|rejection| MiningError::UnreadableBody(rejection.body_text()))?;
    let record = parse_record(&body)?;

    let mined = state.miner.mine(record).await?;

    let encoded = encode_record(mined)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        encoded,
    ))
}

/// Decode a request body into a fresh, unmined record
///
/// The body must be a JSON object; missing fields take their zero value.
pub fn parse_record(body: &[u8]) -> MiningResult<Record> {
    let object: Map<String, Value> =
        serde_json::from_slice(body).map_err(MiningError::MalformedRecord)?;
    let request: MineRequest =
        serde_json::from_value(Value::Object(object)).map_err(MiningError::MalformedRecord)?;
    Ok(request.into())
}

/// Encode a mined record as the response body
pub fn encode_record(record: Record) -> MiningResult<Vec<u8>> {
    serde_json::to_vec(&MinedRecordResponse::from(record)).map_err(MiningError::Serialization)
}
