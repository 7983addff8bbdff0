pub mod executable;
pub mod process;
