use crate::error::TimestreamError;
use crate::journal::{JournalWriter, UsageSample};
use crate::utils::clock;
use std::future::{self, Future};
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, System};
use tracing::{debug, info};

pub const DEFAULT_SAMPLING_INTERVAL: Duration = Duration::from_millis(2);

/// Accumulated CPU time of a process at one refresh.
#[derive(Debug, Clone, Copy)]
struct CpuMark {
    cpu_time_ms: u64,
    at: Instant,
}

impl CpuMark {
    /// CPU percent spent between `previous` and `self`. Not normalized by the
    /// number of cores, so a process busy on two cores reports 200.
    fn percent_since(&self, previous: &CpuMark) -> f32 {
        let wall_ms = self.at.duration_since(previous.at).as_secs_f64() * 1000.0;
        if wall_ms <= 0.0 {
            return 0.0;
        }

        let cpu_ms = self.cpu_time_ms.saturating_sub(previous.cpu_time_ms) as f64;
        (cpu_ms / wall_ms * 100.0) as f32
    }
}

/// Polls memory and CPU of one process until it exits.
pub struct ResourceSampler {
    pid: Pid,
    interval: Duration,
    system: System,
    last: Option<CpuMark>,
}

impl ResourceSampler {
    pub fn new(pid: u32, interval: Duration) -> Self {
        Self {
            pid: Pid::from_u32(pid),
            interval,
            system: System::new(),
            last: None,
        }
    }

    /// Returns `(rss bytes, cpu percent since the previous refresh)` or `None`
    /// once the process is gone.
    fn refresh(&mut self) -> Option<(u64, f32)> {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        let process = self.system.process(self.pid)?;
        if matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead) {
            return None;
        }

        let rss = process.memory();
        let mark = CpuMark {
            cpu_time_ms: process.accumulated_cpu_time(),
            at: Instant::now(),
        };
        let cpu = self
            .last
            .replace(mark)
            .map_or(0.0, |previous| mark.percent_since(&previous));
        Some((rss, cpu))
    }

    /// Writes one sample per interval until the process exits and returns how
    /// many were written.
    pub async fn run(self, writer: &mut JournalWriter) -> Result<u64, TimestreamError> {
        self.run_until(writer, future::pending()).await
    }

    /// Same as [`run`](Self::run), but also stops once `stop` completes.
    pub async fn run_until<F>(
        mut self,
        writer: &mut JournalWriter,
        stop: F,
    ) -> Result<u64, TimestreamError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(stop);
        // The first refresh only primes CPU accounting.
        if self.refresh().is_none() {
            info!("Process: {} is not running, nothing to sample.", self.pid);
            return Ok(0);
        }

        let mut samples = 0;
        loop {
            // A stop still takes one last sample, so a short-lived process
            // leaves at least one line behind.
            let stopped = tokio::select! {
                _ = &mut stop => true,
                _ = tokio::time::sleep(self.interval) => false,
            };

            let ts = clock::epoch_secs();
            let Some((rss, cpu)) = self.refresh() else {
                debug!("Process: {} has exited.", self.pid);
                break;
            };

            writer.append(&UsageSample { ts, rss, cpu })?;
            samples += 1;
            if stopped {
                debug!("Sampling of process: {} stopped.", self.pid);
                break;
            }
        }

        debug!(
            "Wrote {samples} samples of process: {} to: {}",
            self.pid,
            writer.path().display()
        );
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::read_journal;
    use std::process::Command;

    #[tokio::test]
    async fn samples_should_be_ordered_in_time_until_process_exits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage-server-1-items.jsonl");
        let mut child = Command::new("sleep").arg("0.5").spawn().unwrap();

        let mut writer = JournalWriter::create(&path).unwrap();
        let sampler = ResourceSampler::new(child.id(), Duration::from_millis(10));
        let written = sampler.run(&mut writer).await.unwrap();
        child.wait().unwrap();

        let samples: Vec<UsageSample> = read_journal(&path).unwrap();
        assert_eq!(samples.len() as u64, written);
        assert!(!samples.is_empty());
        assert!(samples.windows(2).all(|pair| pair[0].ts <= pair[1].ts));
    }

    #[tokio::test]
    async fn given_missing_process_should_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.jsonl");
        let mut child = Command::new("true").spawn().unwrap();
        let pid = child.id();
        child.wait().unwrap();

        let mut writer = JournalWriter::create(&path).unwrap();
        let written = ResourceSampler::new(pid, Duration::from_millis(1))
            .run(&mut writer)
            .await
            .unwrap();
        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn given_busy_process_mean_cpu_should_be_close_to_one_core() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage-server-1-items.jsonl");
        let mut child = Command::new("sh")
            .args(["-c", "while :; do :; done"])
            .spawn()
            .unwrap();
        let pid = child.id();
        let killer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            child.kill().unwrap();
            child.wait().unwrap();
        });

        let mut writer = JournalWriter::create(&path).unwrap();
        ResourceSampler::new(pid, DEFAULT_SAMPLING_INTERVAL)
            .run(&mut writer)
            .await
            .unwrap();
        killer.await.unwrap();

        let samples: Vec<UsageSample> = read_journal(&path).unwrap();
        assert!(samples.len() > 10);
        let mean = samples.iter().map(|sample| sample.cpu as f64).sum::<f64>()
            / samples.len() as f64;
        assert!(mean > 50.0, "mean cpu: {mean}");
    }

    #[tokio::test]
    async fn sampling_should_end_when_stopped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage-client-1-items.jsonl");
        let mut writer = JournalWriter::create(&path).unwrap();

        let written = ResourceSampler::new(std::process::id(), Duration::from_millis(5))
            .run_until(
                &mut writer,
                tokio::time::sleep(Duration::from_millis(100)),
            )
            .await
            .unwrap();

        let samples: Vec<UsageSample> = read_journal(&path).unwrap();
        assert!(written > 0);
        assert_eq!(samples.len() as u64, written);
        assert!(samples.iter().all(|sample| sample.rss > 0));
    }

    #[test]
    fn cpu_percent_should_relate_cpu_time_to_wall_time() {
        let start = Instant::now();
        let previous = CpuMark {
            cpu_time_ms: 100,
            at: start,
        };
        let busy = CpuMark {
            cpu_time_ms: 300,
            at: start + Duration::from_millis(400),
        };
        let idle = CpuMark {
            cpu_time_ms: 100,
            at: start + Duration::from_millis(400),
        };

        assert!((busy.percent_since(&previous) - 50.0).abs() < 0.01);
        assert_eq!(idle.percent_since(&previous), 0.0);
        assert_eq!(previous.percent_since(&previous), 0.0);
    }
}
