use std::path::PathBuf;
use thiserror::Error;
use timestream::error::TimestreamError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{} already exists. Remove it or choose a different output directory.", .0.display())]
    OutputExists(PathBuf),
    #[error("No {table} data found under {}", .dir.display())]
    NoData { table: String, dir: PathBuf },
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("CSV error")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    JournalError(#[from] TimestreamError),
}
