//! Registrant and lead batch handlers
//!
//! - POST /api/cadastrar-usuario - Register the referring user
//! - POST /api/cadastrar-leads - Register a batch of 3 to 5 referred leads

use actix_web::{HttpResponse, post, web};
use leadwheel_common::LeadInput;

use crate::{
    error::AppError,
    model::{
        AppState,
        response::{LeadsSavedResponse, RegistrantResponse},
    },
};

use super::model::RegisterLeadsParam;

/// Register the initial user
///
/// POST /api/cadastrar-usuario
#[post("/cadastrar-usuario")]
pub async fn register_user(
    data: web::Data<AppState>,
    body: web::Json<LeadInput>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let registrant = web::block(move || data.lead_store.register_primary(&input)).await??;

    Ok(HttpResponse::Ok().json(RegistrantResponse::new(registrant)))
}

/// Register leads referred by a registrant
///
/// POST /api/cadastrar-leads
///
/// The batch is written only if every lead passes validation.
#[post("/cadastrar-leads")]
pub async fn register_leads(
    data: web::Data<AppState>,
    body: web::Json<RegisterLeadsParam>,
) -> Result<HttpResponse, AppError> {
    let param = body.into_inner();
    let leads_saved =
        web::block(move || data.lead_store.register_batch(&param.reference, &param.leads))
            .await??;

    Ok(HttpResponse::Ok().json(LeadsSavedResponse::new(leads_saved)))
}
