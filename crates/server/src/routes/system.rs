use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Service liveness and configured backend
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        backend: state.summarizer.backend_name().to_string(),
        model: state.config.model.clone(),
    })
}
