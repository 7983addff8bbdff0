use crate::journal::RpcJournal;
use timestream::pool::RecordPool;

/// Shared by every handler of a backend.
#[derive(Debug)]
pub struct AppState {
    pub pool: RecordPool,
    pub journal: RpcJournal,
}

impl AppState {
    pub fn new(pool: RecordPool, journal: RpcJournal) -> Self {
        Self { pool, journal }
    }
}
