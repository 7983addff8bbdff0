use crate::error::TimestreamError;
use chrono::Utc;
use nix::time::{clock_gettime, ClockId};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// System-wide monotonic time in nanoseconds.
///
/// All processes on a host share this clock, so stamps taken by the server,
/// the client and the orchestrator can be compared directly.
pub fn monotonic_ns() -> Result<u64, TimestreamError> {
    let now = clock_gettime(ClockId::CLOCK_MONOTONIC)?;
    Ok(now.tv_sec() as u64 * NANOS_PER_SECOND + now.tv_nsec() as u64)
}

/// Wall-clock nanoseconds since the Unix epoch.
pub fn epoch_ns() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// Wall-clock seconds since the Unix epoch, with sub-second precision.
pub fn epoch_secs() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + now.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_should_never_go_backwards() {
        let first = monotonic_ns().unwrap();
        let second = monotonic_ns().unwrap();
        assert!(second >= first);
    }

    #[test]
    fn epoch_clocks_should_agree() {
        let secs = epoch_secs();
        let nanos = epoch_ns() as f64 / NANOS_PER_SECOND as f64;
        assert!((nanos - secs).abs() < 1.0);
    }
}
