//! CSV append sink
//!
//! Appends one row per record to a local CSV file. The file is opened fresh
//! for every append so a sink that becomes unwritable mid-session degrades to
//! per-record warnings instead of failing at startup.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};
use crate::models::Record;

use super::RecordSink;

/// Write-only CSV sink
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink targeting `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn append(&mut self, record: &Record) -> TallyResult<()> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TallyError::Sink(format!("{}: {}", self.path.display(), e)))?;

        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer.write_record([
                "date",
                "kind",
                "amount",
                "currency",
                "converted",
                "category",
                "note",
            ])?;
        }

        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.kind.as_str().to_string(),
            format!("{:.2}", record.amount),
            record.currency.as_str().to_string(),
            format!("{:.2}", record.converted),
            record.category.as_str().to_string(),
            record.note.clone(),
        ])?;

        writer
            .flush()
            .map_err(|e| TallyError::Sink(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
