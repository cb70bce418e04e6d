//! Leadwheel Persistence - Append-only lead log
//!
//! This crate provides:
//! - The `LeadLog` trait over append-only lead storage
//! - `CsvLeadLog`, the flat-file backend used in production
//! - `MemoryLeadLog`, a vector-backed backend for tests and throwaway runs
//! - `StorageMode` selection and construction of the configured backend

pub mod csv_log;
pub mod memory;
pub mod traits;

use std::path::Path;
use std::sync::Arc;

use leadwheel_common::Result;

pub use csv_log::{CsvLeadLog, LOG_HEADER};
pub use memory::MemoryLeadLog;
pub use traits::{LeadLog, StorageMode};

/// Build the lead log for the configured storage mode.
///
/// `path` is only used by the CSV backend.
pub fn open_lead_log(mode: StorageMode, path: &Path) -> Result<Arc<dyn LeadLog>> {
    match mode {
        StorageMode::Csv => Ok(Arc::new(CsvLeadLog::open(path)?)),
        StorageMode::Memory => Ok(Arc::new(MemoryLeadLog::new())),
    }
}
