use clap::ValueEnum;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// The backend stack under test.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Display, ValueEnum,
)]
pub enum BenchmarkMode {
    #[display("grpc")]
    #[serde(rename = "grpc")]
    #[value(name = "grpc")]
    Grpc,
    #[display("rest_proto")]
    #[serde(rename = "rest_proto")]
    #[value(name = "rest_proto")]
    RestProto,
    #[display("rest_json")]
    #[serde(rename = "rest_json")]
    #[value(name = "rest_json")]
    RestJson,
}

impl BenchmarkMode {
    pub const ALL: [BenchmarkMode; 3] = [
        BenchmarkMode::Grpc,
        BenchmarkMode::RestProto,
        BenchmarkMode::RestJson,
    ];

    pub fn default_port(&self) -> u16 {
        match self {
            BenchmarkMode::Grpc => 50051,
            BenchmarkMode::RestProto => 8000,
            BenchmarkMode::RestJson => 8001,
        }
    }

    pub fn logger_prefix(&self) -> &'static str {
        match self {
            BenchmarkMode::Grpc => "grpc",
            BenchmarkMode::RestProto => "rest_proto",
            BenchmarkMode::RestJson => "rest_json",
        }
    }
}
