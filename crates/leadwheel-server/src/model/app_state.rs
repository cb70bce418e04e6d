//! Application state shared across handlers

use crate::{model::config::Configuration, service::LeadStore};

/// State handed to every HTTP handler through `web::Data`
pub struct AppState {
    pub configuration: Configuration,
    pub lead_store: LeadStore,
}

impl AppState {
    pub fn new(configuration: Configuration, lead_store: LeadStore) -> Self {
        Self {
            configuration,
            lead_store,
        }
    }
}
