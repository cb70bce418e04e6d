// Main library module for Leadwheel - a lead capture and prize wheel service
// The binary in main.rs only wires configuration, logging, and the HTTP server.

// Module declarations
pub mod api; // HTTP handlers, request models, and routing
pub mod error; // Error handling and HTTP error mapping
pub mod metrics; // Metrics and observability
pub mod model; // Configuration, application state, and response types
pub mod service; // Business services
pub mod startup; // Application startup utilities

// Re-export shared types from leadwheel-common
pub use leadwheel_common::{LeadInput, LeadRecord, LeadStats, LeadwheelError, PrizeWheel};

pub use model::{AppState, Configuration};
pub use service::LeadStore;
