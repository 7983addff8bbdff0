//! Append-only JSON-lines journals written by the benchmark processes.
//!
//! Each file has exactly one producer: the server writes RPC records, the
//! client writes request records, the monitor writes usage samples and the
//! orchestrator writes timing anchors.

pub mod layout;
pub mod reader;
pub mod records;
pub mod writer;

pub use layout::{JournalLayout, UsageSide};
pub use reader::read_journal;
pub use records::{ClientRecord, RpcRecord, TimingAnchor, UsageSample};
pub use writer::JournalWriter;
