use crate::grpc::service::TimestreamService;
use crate::server_error::ServerError;
use crate::state::AppState;
use std::future::Future;
use std::sync::Arc;
use timestream::grpc::{TimestreamServer, MAX_MESSAGE_SIZE};
use tokio::net::TcpListener;
use tonic::transport::server::TcpIncoming;
use tonic::transport::Server;
use tracing::info;

pub async fn start(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let address = listener.local_addr()?;
    let service = TimestreamServer::new(TimestreamService::new(state))
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE);
    let incoming = TcpIncoming::from_listener(listener, true, None)
        .map_err(|error| ServerError::CannotAcceptGrpcConnections(error.to_string()))?;

    info!("Started gRPC API on: {address:?}");
    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await?;
    info!("gRPC API has stopped.");
    Ok(())
}
