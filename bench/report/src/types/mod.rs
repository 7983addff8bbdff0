pub mod latency_row;
pub mod summary_row;
pub mod usage_row;
