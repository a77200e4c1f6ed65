use actix_multipart::form::{tempfile::TempFileConfig, MultipartFormConfig};
use actix_web::web;

use crate::{config::Config, errors::AppError};

pub mod health_handler;
pub mod quiz_handler;

pub use health_handler::{health_check, index};
pub use quiz_handler::{classification_keywords, generate_from_pdf, reclassify_question};

pub const API_SCOPE: &str = "/api/quiz";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope(API_SCOPE)
            .service(generate_from_pdf)
            .service(reclassify_question)
            .service(classification_keywords)
            .service(health_check),
    );
}

/// Malformed JSON bodies answer with the usual `{success, message}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected JSON body: {}", err);
        AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
    })
}

pub fn multipart_config(config: &Config) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(config.max_file_size)
        .error_handler(|err, _req| {
            log::warn!("Rejected multipart upload: {}", err);
            AppError::ValidationError(format!("Invalid upload: {}", err)).into()
        })
}

/// Uploads land in `UPLOAD_DIR` and are removed when the request finishes.
pub fn temp_file_config(config: &Config) -> TempFileConfig {
    TempFileConfig::default().directory(&config.upload_dir)
}
