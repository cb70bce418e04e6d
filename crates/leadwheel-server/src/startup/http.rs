//! HTTP server setup module.

use actix_cors::Cors;
use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api::route, model::AppState};

/// Creates and binds the main HTTP server.
///
/// Serves the lead capture API under `/api` and the static frontend from the
/// configured directory.
pub fn main_server(
    app_state: web::Data<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    let static_dir = app_state.configuration.static_dir();

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(|cfg| route::configure(cfg, &static_dir))
    })
    .bind((address, port))?
    .run())
}
