use crate::server_error::ServerError;
use std::path::Path;
use timestream::error::TimestreamError;
use timestream::journal::{JournalWriter, RpcRecord};
use timestream::utils::clock;
use timestream::utils::request_id::RequestId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Handle used by request handlers to record served requests.
///
/// A single blocking task owns the journal file; the task ends once every
/// handle has been dropped and reports how many records it wrote.
#[derive(Debug, Clone)]
pub struct RpcJournal {
    sender: mpsc::UnboundedSender<RpcRecord>,
}

pub type JournalTask = JoinHandle<Result<u64, TimestreamError>>;

impl RpcJournal {
    pub fn start(path: &Path) -> Result<(Self, JournalTask), ServerError> {
        let mut writer = JournalWriter::open(path)?;
        let (sender, mut receiver) = mpsc::unbounded_channel::<RpcRecord>();
        let task = tokio::task::spawn_blocking(move || {
            let mut written = 0;
            while let Some(record) = receiver.blocking_recv() {
                writer.append(&record)?;
                written += 1;
            }
            debug!(
                "RPC journal: {} closed after {written} records.",
                writer.path().display()
            );
            Ok(written)
        });

        Ok((Self { sender }, task))
    }

    /// Stamps `t_out` and queues the record.
    pub fn record(&self, t_in: u64, req_id: Option<RequestId>) {
        let t_out = match clock::monotonic_ns() {
            Ok(t_out) => t_out,
            Err(error) => {
                warn!("Cannot stamp outbound time, request: {req_id:?} is not journaled: {error}");
                return;
            }
        };

        if self
            .sender
            .send(RpcRecord {
                t_in,
                t_out,
                req_id,
            })
            .is_err()
        {
            warn!("RPC journal is closed, dropping record.");
        }
    }
}
