use crate::http::error::CustomError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{post, MethodRouter};
use axum::Router;
use prost::Message;
use std::sync::Arc;
use timestream::http::{JSON_CONTENT_TYPE, PROTOBUF_CONTENT_TYPE, RECORDS_PATH};
use timestream::error::TimestreamError;
use timestream::mode::BenchmarkMode;
use timestream::models::{RecordListRequest, RecordListResponse};
use timestream::utils::clock;
use timestream::utils::request_id::{RequestId, REQUEST_ID_HEADER};

const INVALID_PROTOBUF_BODY: &str = "Body must be a protobuf RecordListRequest";
const INVALID_JSON_BODY: &str = "Body must be JSON: {\"count\": <int>}";

pub fn router(mode: BenchmarkMode, state: Arc<AppState>) -> Router {
    let handler: MethodRouter<Arc<AppState>> = match mode {
        BenchmarkMode::RestJson => post(get_record_list_json),
        _ => post(get_record_list_proto),
    };
    Router::new().route(RECORDS_PATH, handler).with_state(state)
}

async fn get_record_list_proto(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, CustomError> {
    let t_in = clock::monotonic_ns()?;
    let request =
        RecordListRequest::decode(body).map_err(|_| CustomError::InvalidBody(INVALID_PROTOBUF_BODY))?;
    let records = state
        .pool
        .take(request.count)
        .map_err(|_| CustomError::PoolSizeExceeded)?;
    let payload = RecordListResponse {
        records: records.to_vec(),
    }
    .encode_to_vec();

    state.journal.record(t_in, request_id(&headers));
    Ok(([(CONTENT_TYPE, PROTOBUF_CONTENT_TYPE)], payload).into_response())
}

async fn get_record_list_json(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, CustomError> {
    let t_in = clock::monotonic_ns()?;
    let request: RecordListRequest =
        serde_json::from_slice(&body).map_err(|_| CustomError::InvalidBody(INVALID_JSON_BODY))?;
    let records = state
        .pool
        .take(request.count)
        .map_err(|_| CustomError::PoolSizeExceeded)?;
    let payload = serde_json::to_vec(&RecordListResponse {
        records: records.to_vec(),
    })
    .map_err(TimestreamError::from)?;

    state.journal.record(t_in, request_id(&headers));
    Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], payload).into_response())
}

fn request_id(headers: &HeaderMap) -> Option<RequestId> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}
