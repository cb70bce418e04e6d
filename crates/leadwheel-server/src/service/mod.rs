//! Business services

pub mod lead_store;

pub use lead_store::LeadStore;
