use crate::state::AppState;
use std::sync::Arc;
use timestream::grpc::Timestream;
use timestream::models::{RecordListRequest, RecordListResponse};
use timestream::utils::clock;
use timestream::utils::request_id::{RequestId, REQUEST_ID_HEADER};
use tonic::{Request, Response, Status};

pub const POOL_SIZE_EXCEEDED: &str = "count exceeds pool size";

pub struct TimestreamService {
    state: Arc<AppState>,
}

impl TimestreamService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl Timestream for TimestreamService {
    async fn get_record_list_response(
        &self,
        request: Request<RecordListRequest>,
    ) -> Result<Response<RecordListResponse>, Status> {
        let t_in = clock::monotonic_ns().map_err(|error| Status::internal(error.to_string()))?;
        let req_id = request
            .metadata()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<RequestId>().ok());

        let records = self
            .state
            .pool
            .take(request.get_ref().count)
            .map_err(|_| Status::invalid_argument(POOL_SIZE_EXCEEDED))?;
        let response = RecordListResponse {
            records: records.to_vec(),
        };

        self.state.journal.record(t_in, req_id);
        Ok(Response::new(response))
    }
}
