use serde::{Deserialize, Serialize};
use timestream::journal::{TimingAnchor, UsageSample, UsageSide};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRow {
    pub protocol: String,
    pub size: u64,
    pub usage_side: UsageSide,
    pub ts: f64,
    pub rss: u64,
    pub cpu: f32,
    pub perf_base_ns: u64,
    pub epoch_base_ns: u64,
}

impl UsageRow {
    pub fn new(
        protocol: &str,
        side: UsageSide,
        anchor: &TimingAnchor,
        sample: &UsageSample,
    ) -> Self {
        Self {
            protocol: protocol.to_string(),
            size: anchor.size,
            usage_side: side,
            ts: sample.ts,
            rss: sample.rss,
            cpu: sample.cpu,
            perf_base_ns: anchor.perf_base_ns,
            epoch_base_ns: anchor.epoch_base_ns,
        }
    }
}
