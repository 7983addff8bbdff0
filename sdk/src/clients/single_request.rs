use crate::clients::client_for;
use crate::error::TimestreamError;
use crate::journal::{ClientRecord, JournalWriter};
use crate::mode::BenchmarkMode;
use crate::utils::clock;
use crate::utils::request_id::RequestId;
use std::path::Path;
use tracing::debug;

/// Target of one measured request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRequest {
    pub mode: BenchmarkMode,
    pub host: String,
    pub port: u16,
    pub count: u64,
}

/// Performs one request and appends its [`ClientRecord`] to the journal at
/// `journal_path`. The journal is only opened once the response arrived, so a
/// failed request leaves no file behind.
pub async fn run_single_request(
    request: &SingleRequest,
    journal_path: &Path,
) -> Result<ClientRecord, TimestreamError> {
    let record = perform_single_request(request).await?;
    JournalWriter::open(journal_path)?.append(&record)?;
    Ok(record)
}

/// Performs one request without journaling it.
///
/// `t0` is taken before the client is built, `t_req` right before the call and
/// `t_res` once the response is decoded, so `t_res - t_req` is the RPC latency
/// and `t_res - t0` the whole client lifecycle.
pub async fn perform_single_request(
    request: &SingleRequest,
) -> Result<ClientRecord, TimestreamError> {
    let req_id = RequestId::random();
    let t0 = clock::monotonic_ns()?;

    let mut client = client_for(request.mode, &request.host, request.port)?;

    let t_req = clock::monotonic_ns()?;
    let outcome = client.fetch_records(request.count, &req_id).await?;
    let t_res = clock::monotonic_ns()?;

    debug!(
        "Received {} records ({} bytes) for request: {req_id}",
        outcome.records.len(),
        outcome.response_bytes
    );

    Ok(ClientRecord {
        t0,
        t_req,
        t_res,
        req_id,
        req_size_bytes: outcome.request_bytes,
        res_size_bytes: outcome.response_bytes,
    })
}
