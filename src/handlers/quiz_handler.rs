use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{is_pdf_filename, GenerateQuizForm, ReclassifyQuestionRequest},
        response::{ClassificationKeywordsResponse, GenerateQuizResponse, ReclassifyQuestionResponse},
    },
};

#[post("/generate-from-pdf")]
pub async fn generate_from_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<GenerateQuizForm>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let file_name = form.file_name().unwrap_or_default().to_string();
    if !is_pdf_filename(&file_name) {
        log::warn!("[{}] Rejected upload '{}': not a PDF", request_id, file_name);
        return Err(AppError::ValidationError(
            "Only PDF files are allowed".to_string(),
        ));
    }

    let counts = form.counts();
    counts.validate()?;

    log::info!("[{}] Received file: {}", request_id, file_name);
    let upload_path = form.file.file.path().to_path_buf();

    let result = state
        .quiz_service
        .generate_from_pdf(&upload_path, &form.title(), counts, form.classify())
        .await;

    drop(form);
    log::info!("Cleaned up temporary file: {}", upload_path.display());

    let quiz = result.map_err(|e| {
        log::error!("[{}] Error generating quiz from '{}': {}", request_id, file_name, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse::new(quiz)))
}

#[post("/reclassify-question")]
pub async fn reclassify_question(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ReclassifyQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let classification = state
        .classifier
        .classify_detailed(&request.question)
        .await
        .map_err(|e| {
            log::error!(
                "[{}] Error reclassifying question: {}",
                get_request_id(&req).unwrap_or_default(),
                e
            );
            e
        })?;

    Ok(HttpResponse::Ok().json(ReclassifyQuestionResponse {
        success: true,
        classification,
    }))
}

#[get("/classification-keywords")]
pub async fn classification_keywords() -> HttpResponse {
    HttpResponse::Ok().json(ClassificationKeywordsResponse::default())
}
