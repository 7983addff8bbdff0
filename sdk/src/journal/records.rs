use crate::error::TimestreamError;
use crate::mode::BenchmarkMode;
use crate::utils::clock;
use crate::utils::request_id::RequestId;
use serde::{Deserialize, Serialize};

/// Ties the monotonic clock to wall-clock time for one server lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingAnchor {
    pub mode: BenchmarkMode,
    pub size: u64,
    pub perf_base_ns: u64,
    pub epoch_base_ns: u64,
}

impl TimingAnchor {
    pub fn capture(mode: BenchmarkMode, size: u64) -> Result<Self, TimestreamError> {
        let perf_base_ns = clock::monotonic_ns()?;
        let epoch_base_ns = clock::epoch_ns();
        Ok(Self {
            mode,
            size,
            perf_base_ns,
            epoch_base_ns,
        })
    }

    /// Converts a monotonic stamp taken on this host into epoch nanoseconds.
    pub fn to_epoch_ns(&self, perf_ns: u64) -> i128 {
        self.epoch_base_ns as i128 + (perf_ns as i128 - self.perf_base_ns as i128)
    }
}

/// Server-side stamps for one handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRecord {
    pub t_in: u64,
    pub t_out: u64,
    pub req_id: Option<RequestId>,
}

/// Client-side stamps and payload sizes for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Start of the client lifecycle, before any connection is prepared.
    pub t0: u64,
    /// Right before the request is sent.
    pub t_req: u64,
    /// After the response has been received and decoded.
    pub t_res: u64,
    pub req_id: RequestId,
    pub req_size_bytes: u64,
    pub res_size_bytes: u64,
}

impl ClientRecord {
    pub fn latency_ns(&self) -> u64 {
        self.t_res.saturating_sub(self.t_req)
    }
}

/// One resource sample of a watched process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    /// Epoch seconds.
    pub ts: f64,
    /// Resident set size in bytes.
    pub rss: u64,
    /// CPU percent since the previous sample.
    pub cpu: f32,
}
