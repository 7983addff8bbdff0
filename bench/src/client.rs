use crate::args::client::ClientArgs;
use crate::error::BenchError;
use std::path::Path;
use std::time::Duration;
use timestream::clients::single_request::run_single_request;
use timestream::error::TimestreamError;
use timestream::journal::JournalWriter;
use timestream::sampler::ResourceSampler;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

/// Performs one request and appends its record to `--log-file`. Any failure,
/// including a rejection, is returned so the process exits non-zero.
///
/// With `--usage-file` the process samples its own memory and CPU from start
/// to finish, so even a request of a few milliseconds is covered.
pub async fn run(args: ClientArgs) -> Result<(), BenchError> {
    let span = info_span!("client", logger = %args.logger_name());
    async move {
        let usage = match &args.usage_file {
            Some(path) => Some(SelfSampler::start(path, args.usage_interval())?),
            None => None,
        };

        let result = run_single_request(&args.to_request(), &args.log_file).await;
        if let Some(usage) = usage {
            usage.finish().await;
        }

        let record = result?;
        debug!(
            "Request: {} took {} ns",
            record.req_id,
            record.latency_ns()
        );
        println!("Finished");
        Ok::<(), BenchError>(())
    }
    .instrument(span)
    .await
}

/// Resource sampler running on this very process.
struct SelfSampler {
    stop: oneshot::Sender<()>,
    task: JoinHandle<Result<u64, TimestreamError>>,
}

impl SelfSampler {
    fn start(path: &Path, interval: Duration) -> Result<Self, BenchError> {
        let mut writer = JournalWriter::open(path)?;
        let sampler = ResourceSampler::new(std::process::id(), interval);
        let (stop, stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            sampler
                .run_until(&mut writer, async {
                    let _ = stopped.await;
                })
                .await
        });
        Ok(Self { stop, task })
    }

    async fn finish(self) {
        let _ = self.stop.send(());
        match self.task.await {
            Ok(Ok(samples)) => debug!("Client wrote {samples} usage samples."),
            Ok(Err(error)) => warn!("Cannot sample client usage: {error}"),
            Err(error) => warn!("Client usage sampler failed: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timestream::journal::{read_journal, UsageSample};
    use timestream::mode::BenchmarkMode;

    #[tokio::test]
    async fn failed_client_should_leave_usage_but_no_request_journal() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("client-1-items.jsonl");
        let usage_file = dir.path().join("usage-client-1-items.jsonl");

        let result = run(ClientArgs {
            mode: BenchmarkMode::RestJson,
            host: "127.0.0.1".to_string(),
            port: Some(1),
            count: 1,
            log_file: log_file.clone(),
            logger_name: None,
            usage_file: Some(usage_file.clone()),
            usage_interval_ms: 1,
        })
        .await;

        assert!(result.is_err());
        assert!(!log_file.exists());
        let samples: Vec<UsageSample> = read_journal(&usage_file).unwrap();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|sample| sample.rss > 0));
    }
}
