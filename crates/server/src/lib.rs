//! QuerySum HTTP Server
//!
//! Actix-web REST API exposing the summarization endpoint

pub mod state;
pub mod types;

pub mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use querysum_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Starting server on {} (backend: {})",
        bind_address,
        state.summarizer.backend_name()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::query::query)
            .service(routes::system::health)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
