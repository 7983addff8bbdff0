use crate::server_error::ServerError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr; stdout stays free and the RPC journal is a
/// separate file, so benchmark data never mixes with log lines.
pub fn init(log_level: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|error| ServerError::LoggingInitFailure(error.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|error| ServerError::LoggingInitFailure(error.to_string()))
}
