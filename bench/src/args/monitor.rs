use super::defaults::DEFAULT_MONITOR_INTERVAL_SECS;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
pub struct MonitorArgs {
    /// Process to sample
    pub pid: u32,

    /// Usage journal to write
    pub outfile: PathBuf,

    /// Sampling interval in seconds
    #[arg(long, default_value_t = DEFAULT_MONITOR_INTERVAL_SECS, value_parser = parse_interval)]
    pub interval: f64,

    /// Keep existing samples instead of truncating the journal
    #[arg(long, default_value_t = false)]
    pub append: bool,
}

fn parse_interval(v: &str) -> Result<f64, String> {
    let interval: f64 = v
        .parse()
        .map_err(|_| format!("Invalid sampling interval: '{v}'"))?;
    if interval.is_finite() && interval > 0.0 {
        Ok(interval)
    } else {
        Err(format!("Sampling interval must be positive, got: {v}"))
    }
}

impl MonitorArgs {
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }
}
