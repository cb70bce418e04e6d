//! Health check handlers
//!
//! - GET /api/health/liveness - The process is serving requests
//! - GET /api/health/readiness - The lead log is readable

use actix_web::{HttpResponse, Responder, get, http::StatusCode, web};
use tracing::warn;

use crate::model::{AppState, ErrorResult, response::HealthResponse};

#[get("/liveness")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

#[get("/readiness")]
pub async fn readiness(data: web::Data<AppState>) -> HttpResponse {
    let result = web::block(move || data.lead_store.health_check()).await;

    match result {
        Ok(Ok(())) => HttpResponse::Ok().json(HealthResponse::up()),
        Ok(Err(e)) => {
            warn!(error = %e, "Readiness check failed");
            ErrorResult::http_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        Err(e) => ErrorResult::http_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
    }
}
