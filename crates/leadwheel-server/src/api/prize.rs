//! Prize wheel handlers

use actix_web::{HttpResponse, Responder, get, post, web};
use tracing::info;

use crate::model::{
    AppState,
    response::{PrizeDrawResponse, PrizeListResponse},
};

/// Draw one prize at random
///
/// POST /api/sortear-premio
#[post("/sortear-premio")]
pub async fn draw_prize(data: web::Data<AppState>) -> impl Responder {
    let prize = data.lead_store.draw_prize();
    info!(prize = %prize, "Prize drawn");

    HttpResponse::Ok().json(PrizeDrawResponse::new(prize))
}

/// List the prizes on the wheel, in display order
///
/// GET /api/premios
#[get("/premios")]
pub async fn list_prizes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PrizeListResponse::new(data.lead_store.list_prizes()))
}
