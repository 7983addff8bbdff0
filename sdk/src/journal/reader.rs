use crate::error::TimestreamError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads every entry of a JSON-lines journal, skipping blank lines.
pub fn read_journal<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TimestreamError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry =
            serde_json::from_str(&line).map_err(|source| TimestreamError::InvalidJournalEntry {
                path: path.display().to_string(),
                line: index + 1,
                source,
            })?;
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::records::{RpcRecord, UsageSample};
    use crate::journal::writer::JournalWriter;
    use std::fs;

    #[test]
    fn appended_entries_should_be_read_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("server-1-items.jsonl");
        let mut writer = JournalWriter::open(&path).unwrap();
        for t_in in 0..3 {
            writer
                .append(&RpcRecord {
                    t_in,
                    t_out: t_in + 10,
                    req_id: None,
                })
                .unwrap();
        }

        let entries: Vec<RpcRecord> = read_journal(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].t_out, 12);
    }

    #[test]
    fn reopening_for_append_should_keep_previous_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.jsonl");
        let sample = UsageSample {
            ts: 1.5,
            rss: 1024,
            cpu: 0.0,
        };
        JournalWriter::open(&path).unwrap().append(&sample).unwrap();
        JournalWriter::open(&path).unwrap().append(&sample).unwrap();
        assert_eq!(read_journal::<UsageSample>(&path).unwrap().len(), 2);

        JournalWriter::create(&path).unwrap().append(&sample).unwrap();
        assert_eq!(read_journal::<UsageSample>(&path).unwrap().len(), 1);
    }

    #[test]
    fn given_malformed_line_should_report_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jsonl");
        fs::write(&path, "{\"ts\":1.0,\"rss\":1,\"cpu\":0.0}\n\nnot json\n").unwrap();

        let error = read_journal::<UsageSample>(&path).unwrap_err();
        assert!(matches!(
            error,
            TimestreamError::InvalidJournalEntry { line: 3, .. }
        ));
    }
}
