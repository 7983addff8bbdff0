use anyhow::Result;
use clap::Parser;
use server::args::Args;
use server::log::logger;
use server::server::{serve, shutdown_signal};
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(&args.log_level)?;

    let span = info_span!("server", logger = %args.logger_name());
    async move {
        let listener = TcpListener::bind((args.host.as_str(), args.port())).await?;
        info!(
            "Timestream {} server listening on: {}",
            args.mode,
            listener.local_addr()?
        );

        serve(args.to_config(), listener, shutdown_signal()).await?;
        info!("Timestream {} server has shut down.", args.mode);
        Ok::<(), anyhow::Error>(())
    }
    .instrument(span)
    .await
}
