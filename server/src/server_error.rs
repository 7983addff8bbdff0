use thiserror::Error;
use timestream::error::TimestreamError;
use tokio::io;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error")]
    IoError(#[from] io::Error),
    #[error("SDK error")]
    SdkError(#[from] TimestreamError),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("gRPC transport error")]
    GrpcTransportError(#[from] tonic::transport::Error),
    #[error("Cannot accept gRPC connections: {0}")]
    CannotAcceptGrpcConnections(String),
    #[error("RPC journal task failed: {0}")]
    JournalTaskFailed(String),
    #[error("Logging initialization failure: {0}")]
    LoggingInitFailure(String),
}
