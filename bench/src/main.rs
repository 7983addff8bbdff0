mod args;
mod client;
mod error;
mod monitor;
mod report;
mod runner;
mod utils;

use crate::args::{BenchArgs, BenchCommand};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = BenchArgs::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&args.log_level).context("Invalid log level")?)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    match args.command {
        BenchCommand::Run(args) => runner::run(args).await?,
        BenchCommand::RunAll(args) => runner::run_all(args).await?,
        BenchCommand::Client(args) => client::run(args).await?,
        BenchCommand::Monitor(args) => monitor::run(args).await?,
        BenchCommand::Convert(args) => report::convert(args)?,
        BenchCommand::Summarize(args) => report::summarize(args)?,
    }
    Ok(())
}
