use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Quiz Generator API",
        "status": "running"
    }))
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "quiz-generator",
        "bert_classifier": "enabled",
        "quiz_model": state.config.quiz_model,
        "embedding_model": state.config.embedding_model,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use actix_web::{test, App};

    use crate::{
        config::{Config, DEFAULT_EMBEDDING_MODEL, DEFAULT_QUIZ_MODEL},
        services::{generation_service::MockQuizGenerator, pdf_service::MockTextExtractor},
        test_utils::fakes::axis_classifier,
    };

    #[actix_web::test]
    async fn test_health_check() {
        let state = AppState::from_parts(
            Config::test_config(),
            Arc::new(MockTextExtractor::new()),
            Arc::new(MockQuizGenerator::new()),
            Arc::new(axis_classifier()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/quiz").service(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/quiz/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "quiz-generator");
        assert_eq!(body["quiz_model"], DEFAULT_QUIZ_MODEL);
        assert_eq!(body["embedding_model"], DEFAULT_EMBEDDING_MODEL);
    }

    #[actix_web::test]
    async fn test_index() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
