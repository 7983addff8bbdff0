pub mod clock;
pub mod request_id;
