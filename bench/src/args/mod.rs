pub mod client;
pub mod defaults;
pub mod monitor;
pub mod report;
pub mod run;

use clap::{Parser, Subcommand};
use client::ClientArgs;
use monitor::MonitorArgs;
use report::{ConvertArgs, SummarizeArgs};
use run::{RunAllArgs, RunArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Timestream single-request benchmark", long_about = None)]
pub struct BenchArgs {
    #[command(subcommand)]
    pub command: BenchCommand,

    /// Tracing filter, e.g. `info` or `bench=debug`
    #[arg(long, global = true, env = "TIMESTREAM_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum BenchCommand {
    #[command(about = "Benchmark one backend mode over every payload size")]
    Run(RunArgs),

    #[command(
        about = "Benchmark grpc, rest_proto and rest_json in sequence",
        visible_alias = "all"
    )]
    RunAll(RunAllArgs),

    #[command(about = "Perform exactly one request and journal its timings")]
    Client(ClientArgs),

    #[command(about = "Sample memory and CPU of a process until it exits")]
    Monitor(MonitorArgs),

    #[command(about = "Merge the JSON-lines journals into CSV tables")]
    Convert(ConvertArgs),

    #[command(about = "Describe the latency table per protocol and size")]
    Summarize(SummarizeArgs),
}

fn parse_positive_ms(v: &str) -> Result<u64, String> {
    match v.parse::<u64>() {
        Ok(0) => Err("Interval must be at least 1 ms".to_string()),
        Ok(ms) => Ok(ms),
        Err(_) => Err(format!("Invalid interval in milliseconds: '{v}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_should_be_consistent() {
        BenchArgs::command().debug_assert();
    }
}
