//! Lead statistics handler

use actix_web::{HttpResponse, get, web};

use crate::{error::AppError, model::AppState};

/// Aggregate lead counts
///
/// GET /api/stats
///
/// Scans the whole lead log on every call.
#[get("/stats")]
pub async fn get_stats(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = web::block(move || data.lead_store.compute_stats()).await??;

    Ok(HttpResponse::Ok().json(stats))
}
