use crate::configs::server::ServerConfig;
use crate::grpc::grpc_server;
use crate::http::http_server;
use crate::journal::RpcJournal;
use crate::server_error::ServerError;
use crate::state::AppState;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use timestream::mode::BenchmarkMode;
use timestream::pool::RecordPool;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::{info, warn};

const JOURNAL_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Serves `config.mode` on `listener` until `shutdown` resolves, then drains the
/// RPC journal. Returns the number of journaled requests.
pub async fn serve(
    config: ServerConfig,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<u64, ServerError> {
    config.validate()?;
    info!("Initializing server with config: {config}");

    let (journal, journal_task) = RpcJournal::start(&config.log_file)?;
    let state = Arc::new(AppState::new(RecordPool::new(config.pool_size), journal));
    info!(
        "Pre-allocated {} records for mode: {}",
        state.pool.size(),
        config.mode
    );

    match config.mode {
        BenchmarkMode::Grpc => grpc_server::start(listener, state, shutdown).await?,
        BenchmarkMode::RestProto | BenchmarkMode::RestJson => {
            http_server::start(config.mode, listener, state, shutdown).await?
        }
    }

    match timeout(JOURNAL_DRAIN_TIMEOUT, journal_task).await {
        Ok(Ok(result)) => {
            let written = result?;
            info!("Journaled {written} requests to: {}", config.log_file.display());
            Ok(written)
        }
        Ok(Err(error)) => Err(ServerError::JournalTaskFailed(error.to_string())),
        Err(_) => {
            warn!("RPC journal did not close within {JOURNAL_DRAIN_TIMEOUT:?}.");
            Err(ServerError::JournalTaskFailed(
                "journal still has open handles".to_string(),
            ))
        }
    }
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for SIGINT: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!("Cannot listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
