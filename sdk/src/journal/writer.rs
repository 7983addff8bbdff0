use crate::error::TimestreamError;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one compact JSON object per line and flushes after every entry, so a
/// killed producer never leaves a torn line behind.
#[derive(Debug)]
pub struct JournalWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JournalWriter {
    /// Opens `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TimestreamError> {
        Self::open_with(path.as_ref(), false)
    }

    /// Creates `path`, discarding previous content.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TimestreamError> {
        Self::open_with(path.as_ref(), true)
    }

    fn open_with(path: &Path, truncate: bool) -> Result<Self, TimestreamError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let file = options.open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn append<T: Serialize>(&mut self, entry: &T) -> Result<(), TimestreamError> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
