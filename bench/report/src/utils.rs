use crate::error::ReportError;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::fs::OpenOptions;
use std::path::Path;

pub(crate) fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

pub(crate) fn round_optional_float<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => round_float(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Fails with [`ReportError::OutputExists`] before reading anything when
/// `path` is already there.
pub(crate) fn ensure_absent(path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        return Err(ReportError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Writes `rows` with a header line. Never replaces an existing file.
pub(crate) fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|error| match error.kind() {
            std::io::ErrorKind::AlreadyExists => ReportError::OutputExists(path.to_path_buf()),
            _ => ReportError::IoError(error),
        })?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
