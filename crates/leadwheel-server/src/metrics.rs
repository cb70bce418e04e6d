// Metrics module for observability
// Counters are recorded through the `metrics` facade; the Prometheus exporter
// is installed only when enabled in configuration.

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize all metric descriptions
/// Should be called once at application startup
pub fn init_metrics() {
    describe_counter!(
        "leads_registered_total",
        "Total number of rows appended to the lead log"
    );
    describe_counter!(
        "registrants_registered_total",
        "Total number of registrants signed up"
    );
    describe_counter!("prize_draws_total", "Total number of prize draws");
    describe_counter!(
        "validation_failures_total",
        "Total number of requests rejected by validation"
    );
}

/// Expose metrics over HTTP on the given port
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(address)
        .install()?;
    Ok(())
}

pub fn record_registrant() {
    counter!("registrants_registered_total").increment(1);
    counter!("leads_registered_total").increment(1);
}

pub fn record_leads(count: usize) {
    counter!("leads_registered_total").increment(count as u64);
}

pub fn record_prize_draw(prize: &'static str) {
    counter!("prize_draws_total", "prize" => prize).increment(1);
}

pub fn record_validation_failure(operation: &'static str) {
    counter!("validation_failures_total", "operation" => operation).increment(1);
}
