//! Main entry point for the Leadwheel server.
//!
//! Loads configuration, sets up logging and metrics, opens the lead log, and
//! runs the HTTP server until it receives a shutdown signal.

use actix_web::web;
use leadwheel_common::PrizeWheel;
use leadwheel_server::{
    AppState, LeadStore, metrics,
    model::Configuration,
    startup::{self, main_server},
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;

    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    metrics::init_metrics();
    if configuration.metrics_enabled() {
        let metrics_port = configuration.metrics_port();
        metrics::install_exporter(metrics_port)?;
        info!("Prometheus metrics exposed on port {}", metrics_port);
    }

    let storage_mode = configuration.storage_mode()?;
    let storage_path = configuration.storage_path();
    let lead_log = leadwheel_persistence::open_lead_log(storage_mode, &storage_path)?;

    let prize_wheel = PrizeWheel::from_seed(configuration.prize_seed());
    let lead_store = LeadStore::new(lead_log, prize_wheel);
    info!(mode = %storage_mode, location = %lead_store.location(), "Lead log opened");

    let address = configuration.server_address();
    let port = configuration.server_port();
    info!(
        static_dir = %configuration.static_dir().display(),
        "Leadwheel server listening on http://{}:{}",
        address,
        port
    );

    let app_state = web::Data::new(AppState::new(configuration, lead_store));
    main_server(app_state, address, port)?.await?;

    info!("Leadwheel server stopped");
    Ok(())
}
