pub mod record;
pub mod record_list;

pub use record::Record;
pub use record_list::{RecordListRequest, RecordListResponse};
