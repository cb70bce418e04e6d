//! Lead store service
//!
//! `LeadStore` owns the append-only lead log and the prize wheel, and exposes
//! every operation the HTTP API offers. All operations are synchronous; the
//! HTTP layer runs the ones that touch the log on the blocking thread pool.
//!
//! Batch registration is all-or-nothing: every lead is validated before any
//! row is written, and the accepted rows are appended in a single call.

use std::sync::Arc;

use leadwheel_common::{
    LeadInput, LeadRecord, LeadStats, PrizeWheel, REGISTRANT_MARKER, Result,
    validation::{validate_batch, validate_registrant},
};
use leadwheel_persistence::LeadLog;
use tracing::{info, warn};

use crate::metrics;

pub struct LeadStore {
    log: Arc<dyn LeadLog>,
    wheel: PrizeWheel,
}

impl LeadStore {
    pub fn new(log: Arc<dyn LeadLog>, wheel: PrizeWheel) -> Self {
        Self { log, wheel }
    }

    /// Register the initial user, stored with the registrant marker as reference
    pub fn register_primary(&self, input: &LeadInput) -> Result<LeadInput> {
        let registrant = validate_registrant(input).inspect_err(|e| {
            warn!(error = %e, "Rejected registrant");
            metrics::record_validation_failure("register_primary");
        })?;

        let record = LeadRecord::new(
            &registrant,
            REGISTRANT_MARKER,
            LeadRecord::now_timestamp(),
        );
        self.log.append(std::slice::from_ref(&record))?;

        metrics::record_registrant();
        info!(name = %registrant.name, "Registrant registered");
        Ok(registrant)
    }

    /// Register 3 to 5 leads referred by `reference`
    pub fn register_batch(&self, reference: &str, leads: &[LeadInput]) -> Result<Vec<LeadInput>> {
        let (reference, accepted) = validate_batch(reference, leads).inspect_err(|e| {
            warn!(error = %e, count = leads.len(), "Rejected lead batch");
            metrics::record_validation_failure("register_batch");
        })?;

        let records: Vec<LeadRecord> = accepted
            .iter()
            .map(|lead| LeadRecord::new(lead, &reference, LeadRecord::now_timestamp()))
            .collect();
        self.log.append(&records)?;

        metrics::record_leads(records.len());
        info!(reference = %reference, count = records.len(), "Lead batch registered");
        Ok(accepted)
    }

    pub fn draw_prize(&self) -> &'static str {
        let prize = self.wheel.draw();
        metrics::record_prize_draw(prize);
        prize
    }

    pub fn list_prizes(&self) -> &'static [&'static str] {
        self.wheel.prizes()
    }

    /// Count every row in the log. A log that was never written yields zeros,
    /// and malformed rows are still counted.
    pub fn compute_stats(&self) -> Result<LeadStats> {
        self.log.stats()
    }

    /// Every record in append order
    pub fn records(&self) -> Result<Vec<LeadRecord>> {
        self.log.read_all()
    }

    pub fn health_check(&self) -> Result<()> {
        self.log.health_check()
    }

    pub fn location(&self) -> String {
        self.log.location()
    }
}
