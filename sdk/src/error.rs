use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestreamError {
    #[error("Requested count: {requested} exceeds pool size: {pool_size}")]
    PoolSizeExceeded { requested: u64, pool_size: u64 },
    #[error("Request rejected with status: {status}, reason: {reason}")]
    Rejected { status: String, reason: String },
    #[error("Invalid request identifier")]
    InvalidRequestId,
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("IO error")]
    IoError(#[from] io::Error),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Transport error")]
    TransportError(#[from] tonic::transport::Error),
    #[error("Cannot decode protobuf payload")]
    CannotDecodeProtobuf(#[from] prost::DecodeError),
    #[error("Invalid JSON payload")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid journal entry at {path}:{line}")]
    InvalidJournalEntry {
        path: String,
        line: usize,
        source: serde_json::Error,
    },
    #[error("Monotonic clock unavailable")]
    ClockUnavailable(#[from] nix::errno::Errno),
}

impl TimestreamError {
    pub fn as_code(&self) -> u32 {
        match self {
            TimestreamError::PoolSizeExceeded { .. } => 1,
            TimestreamError::Rejected { .. } => 2,
            TimestreamError::InvalidRequestId => 3,
            TimestreamError::CannotParseUrl => 4,
            TimestreamError::IoError(_) => 5,
            TimestreamError::RequestError(_) => 6,
            TimestreamError::TransportError(_) => 7,
            TimestreamError::CannotDecodeProtobuf(_) => 8,
            TimestreamError::InvalidJson(_) => 9,
            TimestreamError::InvalidJournalEntry { .. } => 10,
            TimestreamError::ClockUnavailable(_) => 11,
        }
    }

    pub fn as_text_code(&self) -> &'static str {
        match self {
            TimestreamError::PoolSizeExceeded { .. } => "pool_size_exceeded",
            TimestreamError::Rejected { .. } => "rejected",
            TimestreamError::InvalidRequestId => "invalid_request_id",
            TimestreamError::CannotParseUrl => "cannot_parse_url",
            TimestreamError::IoError(_) => "io_error",
            TimestreamError::RequestError(_) => "request_error",
            TimestreamError::TransportError(_) => "transport_error",
            TimestreamError::CannotDecodeProtobuf(_) => "cannot_decode_protobuf",
            TimestreamError::InvalidJson(_) => "invalid_json",
            TimestreamError::InvalidJournalEntry { .. } => "invalid_journal_entry",
            TimestreamError::ClockUnavailable(_) => "clock_unavailable",
        }
    }
}
