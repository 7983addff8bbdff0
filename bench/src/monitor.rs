use crate::args::monitor::MonitorArgs;
use crate::error::BenchError;
use timestream::journal::JournalWriter;
use timestream::sampler::ResourceSampler;
use tracing::info;

/// Samples `pid` into `outfile` until the process exits or this monitor is
/// interrupted.
pub async fn run(args: MonitorArgs) -> Result<(), BenchError> {
    let mut writer = if args.append {
        JournalWriter::open(&args.outfile)?
    } else {
        JournalWriter::create(&args.outfile)?
    };
    let sampler = ResourceSampler::new(args.pid, args.interval());

    tokio::select! {
        samples = sampler.run(&mut writer) => {
            let samples = samples?;
            info!("Process: {} exited, {samples} samples written.", args.pid);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Monitor for process: {} interrupted.", args.pid);
        }
    }
    Ok(())
}
