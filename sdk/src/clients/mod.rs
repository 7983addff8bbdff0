pub mod single_request;

use crate::client::RecordClient;
use crate::error::TimestreamError;
use crate::grpc::client::GrpcClient;
use crate::http::rest_json::RestJsonClient;
use crate::http::rest_proto::RestProtoClient;
use crate::mode::BenchmarkMode;

/// Builds the client matching `mode`. No connection is made yet.
pub fn client_for(
    mode: BenchmarkMode,
    host: &str,
    port: u16,
) -> Result<Box<dyn RecordClient>, TimestreamError> {
    let client: Box<dyn RecordClient> = match mode {
        BenchmarkMode::Grpc => Box::new(GrpcClient::new(host, port)?),
        BenchmarkMode::RestProto => Box::new(RestProtoClient::new(host, port)?),
        BenchmarkMode::RestJson => Box::new(RestJsonClient::new(host, port)?),
    };
    Ok(client)
}
