//! Persistence traits for the lead log
//!
//! The lead log is append-only: rows are never updated or deleted, and reads
//! always return every row in append order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use leadwheel_common::{LeadRecord, LeadStats, LeadwheelError, Result};

/// Append-only storage of lead records
pub trait LeadLog: Send + Sync {
    /// Append records in order as one write. Rows from concurrent calls are
    /// never interleaved. A failing I/O call may still leave a partial write.
    fn append(&self, records: &[LeadRecord]) -> Result<()>;

    /// Read every record in append order. A log that was never written reads as empty.
    fn read_all(&self) -> Result<Vec<LeadRecord>>;

    /// Count every row in the log
    fn stats(&self) -> Result<LeadStats> {
        Ok(LeadStats::from_records(&self.read_all()?))
    }

    /// Human-readable location of the log, for logging
    fn location(&self) -> String;

    /// Check that the log can be scanned
    fn health_check(&self) -> Result<()> {
        self.stats().map(|_| ())
    }
}

/// Storage backend for the lead log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Flat CSV file on disk
    #[default]
    Csv,
    /// Process memory, lost on restart
    Memory,
}

impl Display for StorageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Csv => write!(f, "csv"),
            StorageMode::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageMode {
    type Err = LeadwheelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "file" => Ok(StorageMode::Csv),
            "memory" | "mem" => Ok(StorageMode::Memory),
            other => Err(LeadwheelError::InternalError(format!(
                "unknown storage mode: {}",
                other
            ))),
        }
    }
}
