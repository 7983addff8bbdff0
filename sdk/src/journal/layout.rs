use crate::mode::BenchmarkMode;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ANCHOR_FILE_NAME: &str = "time_anchor.jsonl";

/// Which process a usage journal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum UsageSide {
    #[display("server")]
    #[serde(rename = "server")]
    Server,
    #[display("client")]
    #[serde(rename = "client")]
    Client,
}

/// File names of one protocol directory, e.g. `data/single_request/grpc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLayout {
    dir: PathBuf,
}

impl JournalLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn for_mode(root: &Path, mode: BenchmarkMode) -> Self {
        Self::new(root.join(mode.to_string()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn anchor_file(&self) -> PathBuf {
        self.dir.join(ANCHOR_FILE_NAME)
    }

    pub fn server_log(&self, size: u64) -> PathBuf {
        self.dir.join(format!("server-{size}-items.jsonl"))
    }

    pub fn client_log(&self, size: u64) -> PathBuf {
        self.dir.join(format!("client-{size}-items.jsonl"))
    }

    pub fn usage_log(&self, side: UsageSide, size: u64) -> PathBuf {
        self.dir.join(format!("usage-{side}-{size}-items.jsonl"))
    }
}
