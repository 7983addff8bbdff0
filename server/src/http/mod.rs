pub mod error;
pub mod http_server;
pub mod records;
pub mod system;
