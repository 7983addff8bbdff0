use crate::http::{records, system};
use crate::server_error::ServerError;
use crate::state::AppState;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use timestream::mode::BenchmarkMode;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start(
    mode: BenchmarkMode,
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let api_name = match mode {
        BenchmarkMode::RestJson => "REST (JSON) API",
        _ => "REST (protobuf) API",
    };

    let app = Router::new()
        .merge(system::router())
        .merge(records::router(mode, state))
        .layer(TraceLayer::new_for_http());

    info!("Started {api_name} on: {:?}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("{api_name} has stopped.");
    Ok(())
}
