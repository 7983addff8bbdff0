pub mod client;

#[allow(clippy::all)]
pub mod proto {
    include!(concat!(env!("OUT_DIR"), "/timestream.Timestream.rs"));
}

pub use proto::timestream_client::TimestreamClient;
pub use proto::timestream_server::{Timestream, TimestreamServer};

/// Send and receive limit of the gRPC backend.
pub const MAX_MESSAGE_SIZE: usize = 160 * 1024 * 1024;
