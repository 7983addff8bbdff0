pub mod grpc_server;
pub mod service;
