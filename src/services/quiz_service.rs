use std::path::Path;
use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::Quiz, dto::request::GenerationCounts},
    services::{
        classifier_service::BloomClassifier,
        generation_service::QuizGenerator,
        pdf_service::TextExtractor,
        quiz_assembly::{apply_classifications, assemble_quiz},
    },
};

pub struct QuizService {
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuizGenerator>,
    classifier: Arc<BloomClassifier>,
}

impl QuizService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuizGenerator>,
        classifier: Arc<BloomClassifier>,
    ) -> Self {
        Self {
            extractor,
            generator,
            classifier,
        }
    }

    pub async fn generate_from_pdf(
        &self,
        path: &Path,
        title: &str,
        counts: GenerationCounts,
        classify: bool,
    ) -> AppResult<Quiz> {
        log::info!("Extracting text from {}", path.display());
        let text = self.extractor.extract_text(path).await?;
        log::info!("Extracted {} characters from PDF", text.chars().count());

        log::info!(
            "Generating quiz: {} multiple choice, {} true/false, {} identification",
            counts.num_multiple_choice,
            counts.num_true_false,
            counts.num_identification
        );
        let raw = self.generator.generate(&text, &counts).await?;
        let mut quiz = assemble_quiz(raw, title);

        if classify {
            log::info!("Classifying {} questions as LOTS/HOTS", quiz.questions.len());
            let classifications = self.classifier.classify_batch(&quiz.question_texts()).await?;
            apply_classifications(&mut quiz, &classifications);

            if let Some(stats) = &quiz.classification_stats {
                log::info!(
                    "Classification complete: {} LOTS ({}%), {} HOTS ({}%)",
                    stats.lots_count,
                    stats.lots_percentage,
                    stats.hots_count,
                    stats.hots_percentage
                );
            }
        }

        log::info!(
            "Quiz '{}' ready with {} questions ({} points)",
            quiz.title,
            quiz.questions.len(),
            quiz.total_points
        );
        Ok(quiz)
    }
}
