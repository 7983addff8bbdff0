use crate::error::TimestreamError;
use crate::mode::BenchmarkMode;
use crate::models::Record;
use crate::utils::request_id::RequestId;
use async_trait::async_trait;

/// What a single fetch produced, including the on-wire payload sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<Record>,
    pub request_bytes: u64,
    pub response_bytes: u64,
}

/// The one operation every backend exposes: "give me the first N records".
#[async_trait]
pub trait RecordClient: Sync + Send {
    fn mode(&self) -> BenchmarkMode;

    async fn fetch_records(
        &mut self,
        count: u64,
        req_id: &RequestId,
    ) -> Result<FetchOutcome, TimestreamError>;
}
