//! Leadwheel Common - Shared types and utilities
//!
//! This crate provides:
//! - Error types (`LeadwheelError`)
//! - Lead data model (inputs, persisted records, statistics)
//! - Field validation for registrants and referred leads
//! - The fixed prize list and a seedable prize wheel

pub mod error;
pub mod model;
pub mod prize;
pub mod validation;

pub use error::LeadwheelError;
pub use model::{LeadInput, LeadRecord, LeadStats, REGISTRANT_MARKER};
pub use prize::{PRIZES, PrizeWheel};
pub use validation::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};

/// Convenience result alias used across the workspace
pub type Result<T> = std::result::Result<T, LeadwheelError>;
