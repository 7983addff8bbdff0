use crate::client::{FetchOutcome, RecordClient};
use crate::error::TimestreamError;
use crate::http::client::HttpClient;
use crate::http::{PROTOBUF_CONTENT_TYPE, RECORDS_PATH};
use crate::mode::BenchmarkMode;
use crate::models::{RecordListRequest, RecordListResponse};
use crate::utils::request_id::RequestId;
use async_trait::async_trait;
use prost::Message;

#[derive(Debug, Clone)]
pub struct RestProtoClient {
    http: HttpClient,
}

impl RestProtoClient {
    pub fn new(host: &str, port: u16) -> Result<Self, TimestreamError> {
        Ok(Self {
            http: HttpClient::new(&format!("http://{host}:{port}"))?,
        })
    }
}

#[async_trait]
impl RecordClient for RestProtoClient {
    fn mode(&self) -> BenchmarkMode {
        BenchmarkMode::RestProto
    }

    async fn fetch_records(
        &mut self,
        count: u64,
        req_id: &RequestId,
    ) -> Result<FetchOutcome, TimestreamError> {
        let body = RecordListRequest::new(count).encode_to_vec();
        let request_bytes = body.len() as u64;
        let response = self
            .http
            .post_raw(RECORDS_PATH, PROTOBUF_CONTENT_TYPE, body, req_id)
            .await?;
        let decoded = RecordListResponse::decode(&response[..])?;

        Ok(FetchOutcome {
            records: decoded.records,
            request_bytes,
            response_bytes: response.len() as u64,
        })
    }
}
