use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse};
use tracing::error;

use crate::state::AppState;
use crate::types::{ErrorResponse, QueryRequest, QueryResponse};

/// POST /query - Summarize the given prompt
///
/// Builds the summarization prompt, makes one backend call, strips the
/// reasoning span from the reply and returns the cleaned text. Backend
/// failures surface as a server error with no partial body.
#[post("/query")]
pub async fn query(
    req: web::Json<QueryRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> HttpResponse {
    match state.summarizer.summarize(&req.prompt).await {
        Ok(response) => HttpResponse::Ok().json(QueryResponse { response }),
        Err(e) => {
            error!("Summarization failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(ErrorResponse {
                error: "Summarization failed".to_string(),
                details: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use querysum_common::AppConfig;
    use querysum_llm::{MockBackend, Summarizer};
    use std::sync::Arc;

    fn test_state(backend: MockBackend) -> web::Data<Arc<AppState>> {
        let state = AppState::with_summarizer(
            AppConfig::default(),
            Summarizer::new(Arc::new(backend)),
        );
        web::Data::new(Arc::new(state))
    }

    #[actix_web::test]
    async fn test_query_strips_reasoning_span() {
        let state = test_state(MockBackend::with_reply(
            "<think>reasoning...</think>The sky is a clear summer blue.",
        ));
        let app = test::init_service(App::new().app_data(state).service(query)).await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"prompt": "The sky is blue."}))
            .to_request();
        let resp: QueryResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.response, "The sky is a clear summer blue.");
    }

    #[actix_web::test]
    async fn test_query_backend_failure_returns_server_error() {
        let state = test_state(MockBackend::failing());
        let app = test::init_service(App::new().app_data(state).service(query)).await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"prompt": "The sky is blue."}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        // Error body only, no partial summary
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Summarization failed");
    }

    #[actix_web::test]
    async fn test_query_missing_prompt_is_bad_request() {
        let state = test_state(MockBackend::with_reply("unused"));
        let app = test::init_service(App::new().app_data(state).service(query)).await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"text": "wrong field"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_query_empty_prompt_is_forwarded() {
        let state = test_state(MockBackend::with_reply("Nothing to summarize."));
        let app = test::init_service(App::new().app_data(state).service(query)).await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({"prompt": ""}))
            .to_request();
        let resp: QueryResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.response, "Nothing to summarize.");
    }
}
