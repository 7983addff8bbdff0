use crate::error::ReportError;
use crate::latency_row::LatencyRow;
use crate::usage_row::UsageRow;
use crate::utils::{ensure_absent, write_csv};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use timestream::journal::{
    read_journal, ClientRecord, JournalLayout, RpcRecord, TimingAnchor, UsageSample, UsageSide,
};
use timestream::utils::request_id::RequestId;
use tracing::{info, warn};

pub const LATENCY_TABLE: &str = "single_request_latency.csv";

pub fn usage_table(side: UsageSide) -> String {
    format!("single_request_{side}_usage.csv")
}

/// Merges the per-protocol journals found under `input_dir` into CSV tables
/// placed in `output_dir`.
#[derive(Debug, Clone)]
pub struct Converter {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Converter {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Builds `single_request_latency.csv` by joining client and server
    /// journals on `req_id`. Returns the number of rows written.
    pub fn convert_latency(&self) -> Result<usize, ReportError> {
        let output = self.output_dir.join(LATENCY_TABLE);
        ensure_absent(&output)?;
        info!("Generating CSV: {}", output.display());

        let mut rows = Vec::new();
        for (protocol, layout) in self.protocol_dirs()? {
            info!("Processing latency for protocol: {protocol}");
            let Some(anchors) = load_anchors(&layout)? else {
                warn!("No anchor file, skipping {protocol}");
                continue;
            };

            for anchor in anchors {
                let client_log = layout.client_log(anchor.size);
                let server_log = layout.server_log(anchor.size);
                if !client_log.exists() || !server_log.exists() {
                    warn!(
                        "Missing client/server logs for size={}, skipping",
                        anchor.size
                    );
                    continue;
                }

                let clients: Vec<ClientRecord> = read_journal(&client_log)?;
                let rpcs: Vec<RpcRecord> = read_journal(&server_log)?;
                rows.extend(join_on_request_id(&protocol, &anchor, &clients, &rpcs));
            }
        }

        self.finish("latency", &output, &rows)
    }

    /// Builds `single_request_<side>_usage.csv` from the usage journals of one
    /// side. Returns the number of rows written.
    pub fn convert_usage(&self, side: UsageSide) -> Result<usize, ReportError> {
        let output = self.output_dir.join(usage_table(side));
        ensure_absent(&output)?;
        info!("Generating CSV: {}", output.display());

        let mut rows = Vec::new();
        for (protocol, layout) in self.protocol_dirs()? {
            info!("Processing {side}-usage for protocol: {protocol}");
            let Some(anchors) = load_anchors(&layout)? else {
                warn!("No anchor file, skipping {protocol}");
                continue;
            };

            for anchor in anchors {
                let usage_log = layout.usage_log(side, anchor.size);
                if !usage_log.exists() {
                    warn!(
                        "Missing {side}-usage log for size={}, skipping",
                        anchor.size
                    );
                    continue;
                }

                let samples: Vec<UsageSample> = read_journal(&usage_log)?;
                rows.extend(
                    samples
                        .iter()
                        .map(|sample| UsageRow::new(&protocol, side, &anchor, sample)),
                );
            }
        }

        self.finish(&format!("{side}-usage"), &output, &rows)
    }

    fn finish<T: serde::Serialize>(
        &self,
        table: &str,
        output: &Path,
        rows: &[T],
    ) -> Result<usize, ReportError> {
        if rows.is_empty() {
            return Err(ReportError::NoData {
                table: table.to_string(),
                dir: self.input_dir.clone(),
            });
        }

        write_csv(output, rows)?;
        info!("Wrote {} rows to {}", rows.len(), output.display());
        Ok(rows.len())
    }

    /// Protocol directories under the input root, sorted by name.
    fn protocol_dirs(&self) -> Result<Vec<(String, JournalLayout)>, ReportError> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(&self.input_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let protocol = entry.file_name().to_string_lossy().into_owned();
            dirs.push((protocol, JournalLayout::new(entry.path())));
        }
        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(dirs)
    }
}

/// Anchors of one protocol directory, or `None` when the anchor file is
/// missing. A size anchored more than once keeps only its latest anchor.
fn load_anchors(layout: &JournalLayout) -> Result<Option<Vec<TimingAnchor>>, ReportError> {
    let path = layout.anchor_file();
    if !path.exists() {
        return Ok(None);
    }

    let anchors: Vec<TimingAnchor> = read_journal(&path)?;
    let mut seen = HashSet::new();
    let mut latest: Vec<TimingAnchor> = anchors
        .into_iter()
        .rev()
        .filter(|anchor| seen.insert(anchor.size))
        .collect();
    latest.reverse();
    Ok(Some(latest))
}

/// Inner join keeping client order; a request id logged several times on
/// both sides yields every pairing. Server records without an id never match.
pub(crate) fn join_on_request_id(
    protocol: &str,
    anchor: &TimingAnchor,
    clients: &[ClientRecord],
    rpcs: &[RpcRecord],
) -> Vec<LatencyRow> {
    let mut by_id: HashMap<&RequestId, Vec<&RpcRecord>> = HashMap::new();
    for rpc in rpcs {
        if let Some(req_id) = &rpc.req_id {
            by_id.entry(req_id).or_default().push(rpc);
        }
    }

    clients
        .iter()
        .flat_map(|client| {
            by_id
                .get(&client.req_id)
                .into_iter()
                .flatten()
                .map(move |rpc| LatencyRow::new(protocol, anchor, client, rpc))
        })
        .collect()
}
