use crate::error::TimestreamError;
use crate::models::Record;

/// Pre-allocated, immutable set of identical records a backend serves from.
#[derive(Debug, Clone)]
pub struct RecordPool {
    records: Vec<Record>,
}

impl RecordPool {
    pub fn new(size: u64) -> Self {
        let prototype = Record::prototype();
        let records = (0..size).map(|_| prototype.clone()).collect();
        Self { records }
    }

    pub fn size(&self) -> u64 {
        self.records.len() as u64
    }

    /// Returns the first `count` records, or an error when the pool is too small.
    pub fn take(&self, count: u64) -> Result<&[Record], TimestreamError> {
        if count > self.size() {
            return Err(TimestreamError::PoolSizeExceeded {
                requested: count,
                pool_size: self.size(),
            });
        }

        Ok(&self.records[..count as usize])
    }
}
