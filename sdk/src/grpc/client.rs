use crate::client::{FetchOutcome, RecordClient};
use crate::error::TimestreamError;
use crate::grpc::TimestreamClient;
use crate::mode::BenchmarkMode;
use crate::models::RecordListRequest;
use crate::utils::request_id::{RequestId, REQUEST_ID_HEADER};
use async_trait::async_trait;
use prost::Message;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, Endpoint};

#[derive(Debug, Clone)]
pub struct GrpcClient {
    endpoint: Endpoint,
    inner: Option<TimestreamClient<Channel>>,
}

impl GrpcClient {
    /// Only validates the address. The channel is built inside the first call,
    /// so the connection is established there just like the other transports
    /// do, and no runtime is needed here.
    pub fn new(host: &str, port: u16) -> Result<Self, TimestreamError> {
        let endpoint = Endpoint::from_shared(format!("http://{host}:{port}"))?;
        Ok(Self {
            endpoint,
            inner: None,
        })
    }

    fn client(&mut self) -> &mut TimestreamClient<Channel> {
        let endpoint = &self.endpoint;
        self.inner.get_or_insert_with(|| {
            TimestreamClient::new(endpoint.connect_lazy())
                .max_decoding_message_size(usize::MAX)
                .max_encoding_message_size(usize::MAX)
        })
    }
}

#[async_trait]
impl RecordClient for GrpcClient {
    fn mode(&self) -> BenchmarkMode {
        BenchmarkMode::Grpc
    }

    async fn fetch_records(
        &mut self,
        count: u64,
        req_id: &RequestId,
    ) -> Result<FetchOutcome, TimestreamError> {
        let payload = RecordListRequest::new(count);
        let request_bytes = payload.encoded_len() as u64;
        let req_id = req_id
            .as_str()
            .parse::<MetadataValue<Ascii>>()
            .map_err(|_| TimestreamError::InvalidRequestId)?;

        let mut request = tonic::Request::new(payload);
        request.metadata_mut().insert(REQUEST_ID_HEADER, req_id);

        let response = self
            .client()
            .get_record_list_response(request)
            .await
            .map_err(|status| TimestreamError::Rejected {
                status: status.code().description().to_string(),
                reason: status.message().to_string(),
            })?
            .into_inner();

        Ok(FetchOutcome {
            response_bytes: response.encoded_len() as u64,
            records: response.records,
            request_bytes,
        })
    }
}
