pub mod args;
pub mod configs;
pub mod grpc;
pub mod http;
pub mod journal;
pub mod log;
pub mod server;
pub mod server_error;
pub mod state;
