use serde::{Deserialize, Serialize};
use timestream::journal::{ClientRecord, RpcRecord, TimingAnchor};

/// One joined request: client stamps, server stamps and the anchor of the
/// server lifetime that handled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRow {
    pub mode: String,
    pub size: u64,
    pub req_id: String,
    pub t0: u64,
    pub t_req: u64,
    pub t_res: u64,
    pub t_in: u64,
    pub t_out: u64,
    pub perf_base_ns: u64,
    pub epoch_base_ns: u64,
    pub req_size_bytes: u64,
    pub res_size_bytes: u64,
}

impl LatencyRow {
    pub fn new(mode: &str, anchor: &TimingAnchor, client: &ClientRecord, rpc: &RpcRecord) -> Self {
        Self {
            mode: mode.to_string(),
            size: anchor.size,
            req_id: client.req_id.to_string(),
            t0: client.t0,
            t_req: client.t_req,
            t_res: client.t_res,
            t_in: rpc.t_in,
            t_out: rpc.t_out,
            perf_base_ns: anchor.perf_base_ns,
            epoch_base_ns: anchor.epoch_base_ns,
            req_size_bytes: client.req_size_bytes,
            res_size_bytes: client.res_size_bytes,
        }
    }

    /// Round trip seen by the client.
    pub fn latency_ms(&self) -> f64 {
        elapsed_ms(self.t_req, self.t_res)
    }

    /// Time spent inside the handler.
    pub fn server_ms(&self) -> f64 {
        elapsed_ms(self.t_in, self.t_out)
    }

    /// Whole client lifecycle, connection setup included.
    pub fn lifecycle_ms(&self) -> f64 {
        elapsed_ms(self.t0, self.t_res)
    }
}

fn elapsed_ms(from: u64, to: u64) -> f64 {
    (to as f64 - from as f64) / 1_000_000.0
}
