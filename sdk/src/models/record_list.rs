use crate::models::record::Record;
use serde::{Deserialize, Serialize};

/// `{"count": n}` on the JSON backend, field 1 on the protobuf ones.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct RecordListRequest {
    #[prost(uint64, tag = "1")]
    pub count: u64,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct RecordListResponse {
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<Record>,
}

impl RecordListRequest {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}
