//! Optional external append sink
//!
//! The original deployment forwarded every new record to an external
//! spreadsheet: write-only, fire-and-forget, never read back. That contract is
//! kept behind a small trait so the session can treat the sink as a swappable
//! collaborator. A sink failure is surfaced as a warning; the in-memory ledger
//! remains the source of truth.

pub mod csv;

use crate::error::TallyResult;
use crate::models::Record;

pub use csv::CsvSink;

/// A write-only destination for newly created records
pub trait RecordSink {
    /// Append one record. Never read back.
    fn append(&mut self, record: &Record) -> TallyResult<()>;

    /// Human-readable name for warnings
    fn describe(&self) -> String;
}
