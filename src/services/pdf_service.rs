use std::path::{Path, PathBuf};

use actix_web::web;
use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

const EMPTY_TEXT_MESSAGE: &str = "Failed to extract text from PDF";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> AppResult<String>;
}

/// Extracts text with `pdf-extract` on the blocking thread pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, path: &Path) -> AppResult<String> {
        let owned: PathBuf = path.to_path_buf();

        let pages = web::block(move || pdf_extract::extract_text_by_pages(&owned).map_err(|e| e.to_string()))
            .await
            .map_err(|e| {
                log::error!("PDF parser aborted: {}", e);
                AppError::ExtractionError(EMPTY_TEXT_MESSAGE.to_string())
            })?
            .map_err(|e| {
                log::error!("Error extracting PDF text from {}: {}", path.display(), e);
                AppError::ExtractionError(format!("Failed to read PDF: {}", e))
            })?;

        join_pages(&pages)
    }
}

pub fn join_pages(pages: &[String]) -> AppResult<String> {
    let text = pages.join("\n").trim().to_string();

    if text.is_empty() {
        return Err(AppError::ExtractionError(EMPTY_TEXT_MESSAGE.to_string()));
    }

    Ok(text)
}
