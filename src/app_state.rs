use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        BloomClassifier, Embedder, OpenAiCompatibleEmbedder, OpenAiQuizGenerator, PdfTextExtractor,
        QuizGenerator, QuizService, TextExtractor,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub classifier: Arc<BloomClassifier>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Embeds the keyword sets once; fails if the embedding provider is unusable.
    pub async fn new(config: Config) -> AppResult<Self> {
        let embedder: Arc<dyn Embedder> = Arc::new(OpenAiCompatibleEmbedder::new(&config)?);
        let classifier = Arc::new(BloomClassifier::initialize(embedder).await?);

        let generator = Arc::new(OpenAiQuizGenerator::new(&config));
        log::info!("Quiz generator using model {}", config.quiz_model);

        Ok(Self::from_parts(
            config,
            Arc::new(PdfTextExtractor),
            generator,
            classifier,
        ))
    }

    pub fn from_parts(
        config: Config,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuizGenerator>,
        classifier: Arc<BloomClassifier>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(extractor, generator, Arc::clone(&classifier)));

        Self {
            quiz_service,
            classifier,
            config: Arc::new(config),
        }
    }
}
