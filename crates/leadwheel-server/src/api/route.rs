//! HTTP API routing configuration

use std::path::Path;

use actix_files::Files;
use actix_web::{Scope, error::InternalError, http::StatusCode, web};

use crate::model::{API_PREFIX, ErrorResult, INDEX_FILE};

use super::{health, lead, prize, stats};

/// Create the lead capture API routes
///
/// Routes:
/// - POST /api/cadastrar-usuario - Register the referring user
/// - POST /api/cadastrar-leads - Register a batch of referred leads
/// - POST /api/sortear-premio - Draw a prize
/// - GET /api/premios - List prizes
/// - GET /api/stats - Lead counts
/// - GET /api/health/liveness - Liveness probe
/// - GET /api/health/readiness - Readiness probe
pub fn routes() -> Scope {
    web::scope(API_PREFIX)
        .service(lead::register_user)
        .service(lead::register_leads)
        .service(prize::draw_prize)
        .service(prize::list_prizes)
        .service(stats::get_stats)
        .service(
            web::scope("/health")
                .service(health::liveness)
                .service(health::readiness),
        )
}

/// Serve the static frontend from `dir`, with `index.html` at `/`
///
/// Must be registered after [`routes`] since it matches every path.
pub fn static_files(dir: &Path) -> Files {
    Files::new("/", dir).index_file(INDEX_FILE)
}

/// JSON extractor settings: malformed bodies answer 400 with an error body
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("invalid request body: {}", err);
        let response = ErrorResult::http_response(StatusCode::BAD_REQUEST, message);
        InternalError::from_response(err, response).into()
    })
}

/// Register the API, its extractor settings, and the static frontend
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(json_config())
        .service(routes())
        .service(static_files(static_dir));
}
