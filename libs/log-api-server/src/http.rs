use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use log_engine::Record;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProduceRequest {
    #[serde(default)]
    pub record: Record,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProduceResponse {
    pub offset: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConsumeRequest {
    #[serde(default)]
    pub offset: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConsumeResponse {
    pub record: Record,
}

// ═══════════════════════════════════════════════════════════════
//  GET / {"offset": N}
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_consume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: ConsumeRequest = serde_json::from_slice(&body).map_err(ApiError::Decode)?;
    let record = state.log.read(req.offset)?;
    tracing::debug!(offset = req.offset, "read record");
    json_response(&ConsumeResponse { record })
}

// ═══════════════════════════════════════════════════════════════
//  POST / {"record": {...}}
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_produce(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: ProduceRequest = serde_json::from_slice(&body).map_err(ApiError::Decode)?;
    let offset = state.log.append(req.record)?;
    tracing::debug!(offset, "appended record");
    json_response(&ProduceResponse { offset })
}

pub(crate) async fn handle_unexpected_method(method: Method) -> ApiError {
    ApiError::UnexpectedMethod(method)
}

/// Сериализуем сами: ошибка encode должна стать 500, а не panic.
fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
