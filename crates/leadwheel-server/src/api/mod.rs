//! HTTP API module
//!
//! Handlers for the lead capture API under `/api`, plus the static frontend.

pub mod health;
pub mod lead;
pub mod model;
pub mod prize;
pub mod route;
pub mod stats;
