//! In-memory lead log

use leadwheel_common::{LeadRecord, Result};
use parking_lot::RwLock;

use crate::traits::LeadLog;

/// Lead log kept in process memory
#[derive(Debug, Default)]
pub struct MemoryLeadLog {
    records: RwLock<Vec<LeadRecord>>,
}

impl MemoryLeadLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl LeadLog for MemoryLeadLog {
    fn append(&self, records: &[LeadRecord]) -> Result<()> {
        self.records.write().extend_from_slice(records);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<LeadRecord>> {
        Ok(self.records.read().clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
