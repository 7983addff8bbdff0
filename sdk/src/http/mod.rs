pub mod client;
pub mod rest_json;
pub mod rest_proto;

pub const RECORDS_PATH: &str = "/records";
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";
pub const JSON_CONTENT_TYPE: &str = "application/json";
