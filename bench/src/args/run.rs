use super::defaults::*;
use super::parse_positive_ms;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use timestream::mode::BenchmarkMode;

/// Knobs shared by `run` and `run-all`.
#[derive(Parser, Debug, Clone)]
pub struct RunProps {
    /// Client invocations per payload size
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Record counts to request, one server lifetime per size
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<u64>,

    /// Seconds to wait for server start and for the cool-off after each size
    #[arg(long, default_value_t = DEFAULT_PAUSE_SECS)]
    pub pause: u64,

    /// Root directory of the journals, one sub-directory per mode
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub output_dir: PathBuf,

    /// Address the servers bind to and the clients connect to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// timestream-server executable, defaults to the one next to this binary
    #[arg(long, short = 'e', value_parser = validate_server_executable_path)]
    pub server_executable: Option<PathBuf>,

    /// Resource sampling interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_MONITOR_INTERVAL_MS, value_parser = parse_positive_ms)]
    pub monitor_interval_ms: u64,

    /// Seconds a stopped process gets to exit before it is killed
    #[arg(long, default_value_t = DEFAULT_GRACE_PERIOD_SECS)]
    pub grace_period_secs: u64,

    /// Forward server output instead of silencing it
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Backend stack to benchmark
    #[arg(value_enum)]
    pub mode: BenchmarkMode,

    #[command(flatten)]
    pub props: RunProps,
}

#[derive(Parser, Debug, Clone)]
pub struct RunAllArgs {
    #[command(flatten)]
    pub props: RunProps,

    /// Seconds to wait between two modes
    #[arg(long, default_value_t = DEFAULT_MODE_PAUSE_SECS)]
    pub mode_pause: u64,

    /// Convert the journals into CSV tables once every mode has finished
    #[arg(long, default_value_t = false)]
    pub convert: bool,
}

fn validate_server_executable_path(v: &str) -> Result<PathBuf, String> {
    if Path::new(v).exists() {
        Ok(PathBuf::from(v))
    } else {
        Err(format!("Provided server executable '{v}' does not exist."))
    }
}

impl RunProps {
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause)
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_millis(self.monitor_interval_ms)
    }
}
