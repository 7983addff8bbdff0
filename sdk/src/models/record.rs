use serde::{Deserialize, Serialize};

/// A single time-series measurement served by every backend.
///
/// The struct is both a protobuf message (gRPC and REST+proto) and a serde
/// document (REST+JSON), so all three backends serve the exact same content.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Record {
    /// Milliseconds since the Unix epoch.
    #[prost(int64, tag = "1")]
    pub timestamp: i64,
    #[prost(string, tag = "2")]
    pub source_id: String,
    #[prost(string, tag = "3")]
    pub metric: String,
    #[prost(double, tag = "4")]
    pub value: f64,
    #[prost(string, tag = "5")]
    pub unit: String,
    #[prost(uint32, tag = "6")]
    pub quality: u32,
    #[prost(string, repeated, tag = "7")]
    pub tags: Vec<String>,
}

impl Record {
    /// The record every pool is filled with.
    pub fn prototype() -> Self {
        Self {
            timestamp: 1_715_965_234_115,
            source_id: "sensor-0042".to_string(),
            metric: "temperature".to_string(),
            value: 21.375,
            unit: "celsius".to_string(),
            quality: 192,
            tags: vec![
                "site:berlin".to_string(),
                "rack:a7".to_string(),
                "env:benchmark".to_string(),
            ],
        }
    }
}
