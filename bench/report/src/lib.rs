pub mod convert;
pub mod error;
pub mod prints;
pub mod summary;
mod types;
mod utils;

pub use types::*;
