use crate::args::run::{RunAllArgs, RunArgs, RunProps};
use crate::error::BenchError;
use crate::report;
use crate::utils::executable::{bench_executable, server_executable};
use crate::utils::process::ManagedProcess;
use human_repr::HumanCount;
use std::fs;
use std::path::{Path, PathBuf};
use timestream::journal::{read_journal, JournalLayout, JournalWriter, TimingAnchor, UsageSide};
use timestream::mode::BenchmarkMode;
use tokio::process::Command;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Everything needed to benchmark one mode.
#[derive(Debug)]
struct ModeRunner {
    mode: BenchmarkMode,
    props: RunProps,
    layout: JournalLayout,
    server_executable: PathBuf,
    bench_executable: PathBuf,
}

pub async fn run(args: RunArgs) -> Result<(), BenchError> {
    ModeRunner::new(args.mode, args.props)?.run().await
}

pub async fn run_all(args: RunAllArgs) -> Result<(), BenchError> {
    let modes = BenchmarkMode::ALL;
    for (index, mode) in modes.iter().enumerate() {
        info!("[{}/{}] Running {mode} benchmark...", index + 1, modes.len());
        if let Err(error) = ModeRunner::new(*mode, args.props.clone())?.run().await {
            error!("{mode} benchmark failed: {error}");
            return Err(BenchError::ModeFailed(*mode));
        }

        if index + 1 < modes.len() {
            info!("Waiting {} s before next mode...", args.mode_pause);
            sleep(std::time::Duration::from_secs(args.mode_pause)).await;
        }
    }
    info!("All three benchmarks finished successfully.");

    if args.convert {
        let dir = &args.props.output_dir;
        report::convert_all(dir, dir)?;
    }
    Ok(())
}

impl ModeRunner {
    fn new(mode: BenchmarkMode, props: RunProps) -> Result<Self, BenchError> {
        Ok(Self {
            mode,
            layout: JournalLayout::for_mode(&props.output_dir, mode),
            server_executable: server_executable(props.server_executable.as_deref())?,
            bench_executable: bench_executable()?,
            props,
        })
    }

    async fn run(&self) -> Result<(), BenchError> {
        fs::create_dir_all(self.layout.dir())?;
        let mut failed_sizes = 0;

        for size in &self.props.sizes {
            info!(
                "=== {} items, {} runs ({}) ===",
                size.human_count_bare(),
                self.props.iterations,
                self.mode
            );
            match self.run_size(*size).await {
                Ok(true) => {}
                Ok(false) => failed_sizes += 1,
                Err(error) => {
                    error!("Size: {size} for mode: {} failed: {error}", self.mode);
                    failed_sizes += 1;
                }
            }
        }

        if failed_sizes > 0 {
            return Err(BenchError::ClientFailed {
                mode: self.mode,
                failed_sizes,
            });
        }
        info!("All {} benchmarks finished.", self.mode);
        Ok(())
    }

    /// One server lifetime. Returns `false` when a client invocation failed.
    async fn run_size(&self, size: u64) -> Result<bool, BenchError> {
        self.reset_size(size)?;
        let anchor = TimingAnchor::capture(self.mode, size)?;
        JournalWriter::open(self.layout.anchor_file())?.append(&anchor)?;

        info!("Starting {} server...", self.mode);
        let server = ManagedProcess::spawn(
            "timestream-server",
            self.server_command(size),
            self.props.verbose,
        )?;
        let server_monitor = match server.id() {
            Some(pid) => Some(self.spawn_monitor(pid, UsageSide::Server, size)?),
            None => None,
        };
        sleep(self.props.pause()).await;

        let outcome = self.run_clients(size).await;

        info!("Shutting down server...");
        let grace = self.props.grace_period();
        if let Err(error) = server.stop(grace).await {
            warn!("Cannot stop {} server: {error}", self.mode);
        }
        if let Some(monitor) = server_monitor {
            if let Err(error) = monitor.stop(grace).await {
                warn!("Cannot stop server monitor: {error}");
            }
        }

        info!(
            "Pausing {} s to relieve pressure on memory",
            self.props.pause
        );
        sleep(self.props.pause()).await;
        outcome
    }

    async fn run_clients(&self, size: u64) -> Result<bool, BenchError> {
        let iterations = self.props.iterations;
        for iteration in 1..=iterations {
            let mut client = ManagedProcess::spawn("client", self.client_command(size), true)?;
            let status = client.wait().await?;
            if !status.success() {
                error!("Run {iteration:3}/{iterations}: client exit={status}");
                return Ok(false);
            }
            info!("Run {iteration:3}/{iterations}: finished");
        }
        Ok(true)
    }

    /// Discards the journals of a previous run of `size` so the new server
    /// lifetime starts from empty files under a fresh anchor.
    fn reset_size(&self, size: u64) -> Result<(), BenchError> {
        for path in [
            self.layout.server_log(size),
            self.layout.client_log(size),
            self.layout.usage_log(UsageSide::Server, size),
            self.layout.usage_log(UsageSide::Client, size),
        ] {
            remove_if_exists(&path)?;
        }

        let anchor_file = self.layout.anchor_file();
        if !anchor_file.exists() {
            return Ok(());
        }

        let anchors: Vec<TimingAnchor> = read_journal(&anchor_file)?;
        let mut writer = JournalWriter::create(&anchor_file)?;
        for anchor in anchors.iter().filter(|anchor| anchor.size != size) {
            writer.append(anchor)?;
        }
        Ok(())
    }

    fn port(&self) -> u16 {
        self.mode.default_port()
    }

    fn server_command(&self, size: u64) -> Command {
        let mut command = Command::new(&self.server_executable);
        command
            .arg("--mode")
            .arg(self.mode.to_string())
            .arg("--host")
            .arg(&self.props.host)
            .arg("--port")
            .arg(self.port().to_string())
            .arg("--pool-size")
            .arg(size.to_string())
            .arg("--logger-name")
            .arg(format!("{}-server-{size}", self.mode.logger_prefix()))
            .arg("--log-file")
            .arg(self.layout.server_log(size));
        command
    }

    fn client_command(&self, size: u64) -> Command {
        let mut command = Command::new(&self.bench_executable);
        command
            .arg("client")
            .arg("--mode")
            .arg(self.mode.to_string())
            .arg("--host")
            .arg(&self.props.host)
            .arg("--port")
            .arg(self.port().to_string())
            .arg("--count")
            .arg(size.to_string())
            .arg("--logger-name")
            .arg(format!("{}-client-{size}", self.mode.logger_prefix()))
            .arg("--log-file")
            .arg(self.layout.client_log(size))
            .arg("--usage-file")
            .arg(self.layout.usage_log(UsageSide::Client, size))
            .arg("--usage-interval-ms")
            .arg(self.props.monitor_interval_ms.to_string());
        command
    }

    fn spawn_monitor(
        &self,
        pid: u32,
        side: UsageSide,
        size: u64,
    ) -> Result<ManagedProcess, BenchError> {
        let interval = self.props.monitor_interval().as_secs_f64();
        let mut command = Command::new(&self.bench_executable);
        command
            .arg("monitor")
            .arg(pid.to_string())
            .arg(self.layout.usage_log(side, size))
            .arg("--interval")
            .arg(interval.to_string());
        ManagedProcess::spawn(&format!("{side} monitor"), command, self.props.verbose)
    }
}

fn remove_if_exists(path: &Path) -> Result<(), BenchError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}
