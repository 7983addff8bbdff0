pub mod client;
pub mod clients;
pub mod error;
pub mod grpc;
pub mod http;
pub mod journal;
pub mod mode;
pub mod models;
pub mod pool;
pub mod sampler;
pub mod utils;
