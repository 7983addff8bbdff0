use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use timestream::error::TimestreamError;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error(transparent)]
    Error(#[from] TimestreamError),
    #[error("{0}")]
    InvalidBody(&'static str),
    #[error("Requested count exceeds pool size")]
    PoolSizeExceeded,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub id: u32,
    pub code: String,
    pub reason: String,
}

impl IntoResponse for CustomError {
    fn into_response(self) -> Response {
        match self {
            CustomError::Error(error) => {
                let status_code = match error {
                    TimestreamError::PoolSizeExceeded { .. } => StatusCode::BAD_REQUEST,
                    TimestreamError::CannotDecodeProtobuf(_) => StatusCode::BAD_REQUEST,
                    TimestreamError::InvalidJson(_) => StatusCode::BAD_REQUEST,
                    TimestreamError::InvalidRequestId => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status_code, Json(ErrorResponse::from_error(error)))
            }
            CustomError::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    id: 0,
                    code: "invalid_body".to_string(),
                    reason: reason.to_string(),
                }),
            ),
            CustomError::PoolSizeExceeded => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    id: 1,
                    code: "pool_size_exceeded".to_string(),
                    reason: CustomError::PoolSizeExceeded.to_string(),
                }),
            ),
        }
        .into_response()
    }
}

impl ErrorResponse {
    pub fn from_error(error: TimestreamError) -> Self {
        ErrorResponse {
            id: error.as_code(),
            code: error.as_text_code().to_string(),
            reason: error.to_string(),
        }
    }
}
