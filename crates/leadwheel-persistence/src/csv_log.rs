//! CSV file backend for the lead log
//!
//! Layout: UTF-8, comma-delimited, one header row followed by one row per
//! lead record. The file and its parent directory are created lazily and the
//! header is written whenever the file is absent or empty.
//!
//! Statistics only look at the `Reference` column, so rows with missing
//! fields or hand-edited values are still counted (with a warning) instead of
//! failing the whole scan.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use leadwheel_common::{LeadRecord, LeadStats, LeadwheelError, REGISTRANT_MARKER, Result};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::traits::LeadLog;

/// Header row of the lead log
pub const LOG_HEADER: [&str; 5] = ["Name", "Email", "Phone", "Reference", "Registered_At"];

/// Position of `Reference` in [`LOG_HEADER`], used when the header row is unusable
const REFERENCE_COLUMN: usize = 3;

/// Lead log stored in a single CSV file.
///
/// Appends from one process are serialized through an internal lock. Several
/// processes writing the same file are not coordinated.
pub struct CsvLeadLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvLeadLog {
    /// Open the log at `path`, creating the file with its header if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let log = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        let (mut file, is_empty) = log.open_for_append()?;
        if is_empty {
            file.write_all(&encode(&[], true)?)?;
            debug!(path = %log.path.display(), "Wrote lead log header");
        }
        info!(path = %log.path.display(), "Lead log ready");

        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for appending and report whether it is empty
    fn open_for_append(&self) -> Result<(File, bool)> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        Ok((file, is_empty))
    }

    fn open_for_read(&self) -> Result<Option<File>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl LeadLog for CsvLeadLog {
    fn append(&self, records: &[LeadRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let _guard = self.write_lock.lock();
        let (mut file, is_empty) = self.open_for_append()?;
        let bytes = encode(records, is_empty)?;
        file.write_all(&bytes)
            .and_then(|_| file.flush())
            .map_err(|e| {
                error!(path = %self.path.display(), error = %e, "Failed to write lead log");
                LeadwheelError::from(e)
            })?;

        debug!(path = %self.path.display(), rows = records.len(), "Appended lead rows");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LeadRecord>> {
        let Some(file) = self.open_for_read()? else {
            return Ok(Vec::new());
        };

        ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file)
            .deserialize()
            .map(|row| row.map_err(csv_error))
            .collect()
    }

    /// Count rows by their `Reference` column.
    ///
    /// Rows with the wrong number of fields are counted. A row without a
    /// `Reference` value counts as a referred lead.
    fn stats(&self) -> Result<LeadStats> {
        let Some(file) = self.open_for_read()? else {
            return Ok(LeadStats::default());
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let reference_column = reader
            .byte_headers()
            .map_err(csv_error)?
            .iter()
            .position(|field| field == LOG_HEADER[REFERENCE_COLUMN].as_bytes())
            .unwrap_or(REFERENCE_COLUMN);

        let mut stats = LeadStats::default();
        let mut row = ByteRecord::new();
        while reader.read_byte_record(&mut row).map_err(csv_error)? {
            if row.len() != LOG_HEADER.len() {
                warn!(
                    path = %self.path.display(),
                    line = row.position().map(|p| p.line()),
                    fields = row.len(),
                    "Malformed lead row"
                );
            }
            let reference = row.get(reference_column).unwrap_or_default();
            stats.count(reference == REGISTRANT_MARKER.as_bytes());
        }

        Ok(stats)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serialize a batch into one buffer so it reaches the file in a single write
fn encode(records: &[LeadRecord], with_header: bool) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    if with_header {
        writer.write_record(LOG_HEADER).map_err(csv_error)?;
    }
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| LeadwheelError::storage(format!("csv: {}", e)))
}

fn csv_error(err: csv::Error) -> LeadwheelError {
    LeadwheelError::storage(format!("csv: {}", err))
}
