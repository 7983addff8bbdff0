use bench_report::error::ReportError;
use std::path::PathBuf;
use thiserror::Error;
use timestream::error::TimestreamError;
use timestream::mode::BenchmarkMode;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Cannot spawn {name}: {source}")]
    CannotSpawnProcess {
        name: String,
        source: std::io::Error,
    },
    #[error("Server executable not found at: {}", .0.display())]
    ServerExecutableNotFound(PathBuf),
    #[error("{failed_sizes} payload size(s) failed for mode: {mode}")]
    ClientFailed {
        mode: BenchmarkMode,
        failed_sizes: usize,
    },
    #[error("Benchmark for mode: {0} failed")]
    ModeFailed(BenchmarkMode),
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("Cannot send signal")]
    SignalError(#[from] nix::errno::Errno),
    #[error(transparent)]
    SdkError(#[from] TimestreamError),
    #[error(transparent)]
    ReportError(#[from] ReportError),
}
