//! LOTS/HOTS classification by mean cosine similarity to Bloom keyword sets.

use std::sync::Arc;

use crate::{
    constants::blooms_keywords::{hots_keywords, lots_keywords},
    errors::{AppError, AppResult},
    models::domain::{BloomLevel, Classification, DetailedClassification},
    services::embedding_service::{ensure_uniform_dimension, Embedder},
};

/// Keyword vectors computed once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct KeywordEmbeddings {
    lots: Vec<Vec<f32>>,
    hots: Vec<Vec<f32>>,
}

impl KeywordEmbeddings {
    pub fn new(lots: Vec<Vec<f32>>, hots: Vec<Vec<f32>>) -> AppResult<Self> {
        if lots.is_empty() || hots.is_empty() {
            return Err(AppError::EmbeddingError(
                "keyword embedding sets must not be empty".to_string(),
            ));
        }

        let lots_dim = ensure_uniform_dimension(&lots)?;
        let hots_dim = ensure_uniform_dimension(&hots)?;
        if lots_dim != hots_dim {
            return Err(AppError::EmbeddingError(format!(
                "keyword dimension mismatch: LOTS {} vs HOTS {}",
                lots_dim, hots_dim
            )));
        }

        Ok(Self { lots, hots })
    }

    /// Embeds both keyword lists, one batched call per list.
    pub async fn compute(embedder: &dyn Embedder) -> AppResult<Self> {
        let lots_keywords = lots_keywords();
        let hots_keywords = hots_keywords();

        log::info!(
            "Generating embeddings for {} LOTS keywords...",
            lots_keywords.len()
        );
        let lots = embedder.embed(&lots_keywords).await?;
        if lots.len() != lots_keywords.len() {
            return Err(count_mismatch(lots_keywords.len(), lots.len()));
        }

        log::info!(
            "Generating embeddings for {} HOTS keywords...",
            hots_keywords.len()
        );
        let hots = embedder.embed(&hots_keywords).await?;
        if hots.len() != hots_keywords.len() {
            return Err(count_mismatch(hots_keywords.len(), hots.len()));
        }

        Self::new(lots, hots)
    }

    pub fn dimension(&self) -> usize {
        self.lots.first().map(Vec::len).unwrap_or(0)
    }

    fn scores(&self, embedding: &[f32]) -> (f64, f64) {
        (
            mean_similarity(embedding, &self.lots),
            mean_similarity(embedding, &self.hots),
        )
    }
}

pub struct BloomClassifier {
    embedder: Arc<dyn Embedder>,
    keywords: Arc<KeywordEmbeddings>,
}

impl BloomClassifier {
    pub fn new(embedder: Arc<dyn Embedder>, keywords: Arc<KeywordEmbeddings>) -> Self {
        Self { embedder, keywords }
    }

    pub async fn initialize(embedder: Arc<dyn Embedder>) -> AppResult<Self> {
        let keywords = KeywordEmbeddings::compute(embedder.as_ref()).await?;
        log::info!(
            "LOTS/HOTS classifier ready (dimension {})",
            keywords.dimension()
        );
        Ok(Self::new(embedder, Arc::new(keywords)))
    }

    pub async fn classify(&self, question: &str) -> AppResult<Classification> {
        Ok(self.classify_detailed(question).await?.summary())
    }

    /// Element-wise identical to `classify`; non-blank inputs share one embedding call.
    pub async fn classify_batch(&self, questions: &[String]) -> AppResult<Vec<Classification>> {
        let mut results = vec![Classification::DEFAULT; questions.len()];

        let (indices, texts): (Vec<usize>, Vec<String>) = questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !is_blank(q))
            .map(|(i, q)| (i, q.clone()))
            .unzip();

        if texts.is_empty() {
            return Ok(results);
        }

        let embeddings = self.embed_checked(&texts).await?;
        for (index, embedding) in indices.into_iter().zip(embeddings.iter()) {
            results[index] = self.score(embedding).summary();
        }

        Ok(results)
    }

    pub async fn classify_detailed(&self, question: &str) -> AppResult<DetailedClassification> {
        if is_blank(question) {
            return Ok(DetailedClassification::DEFAULT);
        }

        let embeddings = self.embed_checked(&[question.to_string()]).await?;
        Ok(self.score(&embeddings[0]))
    }

    async fn embed_checked(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        let embeddings = self.embedder.embed(texts).await?;
        if embeddings.len() != texts.len() {
            return Err(count_mismatch(texts.len(), embeddings.len()));
        }

        let expected = self.keywords.dimension();
        if let Some(bad) = embeddings.iter().find(|e| e.len() != expected) {
            return Err(AppError::EmbeddingError(format!(
                "dimension mismatch: keywords have {}, question has {}",
                expected,
                bad.len()
            )));
        }
        Ok(embeddings)
    }

    fn score(&self, embedding: &[f32]) -> DetailedClassification {
        let (lots_score, hots_score) = self.keywords.scores(embedding);
        decide(lots_score, hots_score)
    }
}

/// Ties go to LOTS.
pub fn decide(lots_score: f64, hots_score: f64) -> DetailedClassification {
    let (classification, winning_score) = if hots_score > lots_score {
        (BloomLevel::Hots, hots_score)
    } else {
        (BloomLevel::Lots, lots_score)
    };

    DetailedClassification {
        classification,
        confidence: winning_score.clamp(0.0, 1.0),
        lots_score,
        hots_score,
        difference: (hots_score - lots_score).abs(),
    }
}

/// Zero-norm or mismatched-length vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

fn mean_similarity(embedding: &[f32], references: &[Vec<f32>]) -> f64 {
    if references.is_empty() {
        return 0.0;
    }
    let total: f64 = references
        .iter()
        .map(|r| cosine_similarity(embedding, r) as f64)
        .sum();
    total / references.len() as f64
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn count_mismatch(expected: usize, actual: usize) -> AppError {
    AppError::EmbeddingError(format!(
        "count mismatch: expected {}, got {}",
        expected, actual
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::embedding_service::MockEmbedder;
    use crate::test_utils::fakes::{axis_classifier, axis_keywords};

    #[test]
    fn cosine_similarity_basics() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), -1.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn decide_breaks_exact_tie_toward_lots() {
        let result = decide(0.42, 0.42);

        assert_eq!(result.classification, BloomLevel::Lots);
        assert_eq!(result.confidence, 0.42);
        assert_eq!(result.difference, 0.0);
    }

    #[test]
    fn decide_prefers_strictly_higher_hots() {
        let result = decide(0.3, 0.31);

        assert_eq!(result.classification, BloomLevel::Hots);
        assert_eq!(result.confidence, 0.31);
        assert!((result.difference - 0.01).abs() < 1e-12);
    }

    #[test]
    fn decide_clamps_confidence_into_unit_range() {
        let result = decide(-0.4, -0.6);

        assert_eq!(result.classification, BloomLevel::Lots);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.lots_score, -0.4);
    }

    #[test]
    fn keyword_embeddings_reject_mismatched_dimensions() {
        let err = KeywordEmbeddings::new(vec![vec![1.0, 0.0]], vec![vec![1.0]]).unwrap_err();
        assert!(matches!(err, AppError::EmbeddingError(_)));
    }

    #[test]
    fn keyword_embeddings_reject_empty_sets() {
        assert!(KeywordEmbeddings::new(vec![], vec![vec![1.0]]).is_err());
    }

    #[actix_web::test]
    async fn classify_blank_question_returns_default_without_embedding() {
        let mut embedder = MockEmbedder::new();
        embedder.expect_embed().never();
        let classifier = BloomClassifier::new(Arc::new(embedder), axis_keywords());

        assert_eq!(classifier.classify("").await.unwrap(), Classification::DEFAULT);
        assert_eq!(classifier.classify("   ").await.unwrap(), Classification::DEFAULT);
        assert_eq!(
            classifier.classify_detailed("\n\t").await.unwrap(),
            DetailedClassification::DEFAULT
        );
    }

    #[actix_web::test]
    async fn classify_labels_recall_question_lots() {
        let result = axis_classifier()
            .classify("Define photosynthesis.")
            .await
            .unwrap();

        assert_eq!(result.label, BloomLevel::Lots);
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[actix_web::test]
    async fn classify_labels_design_question_hots() {
        let result = axis_classifier()
            .classify("Design an experiment to test plant growth.")
            .await
            .unwrap();

        assert_eq!(result.label, BloomLevel::Hots);
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[actix_web::test]
    async fn classify_tie_resolves_to_lots() {
        // Neutral text embeds on the diagonal, equidistant from both symmetric sets.
        let detailed = axis_classifier()
            .classify_detailed("Photosynthesis happens in leaves.")
            .await
            .unwrap();

        assert_eq!(detailed.lots_score, detailed.hots_score);
        assert_eq!(detailed.classification, BloomLevel::Lots);
        assert_eq!(detailed.difference, 0.0);
    }

    #[actix_web::test]
    async fn classify_detailed_reports_both_scores() {
        let detailed = axis_classifier()
            .classify_detailed("Evaluate the argument.")
            .await
            .unwrap();

        assert!(detailed.hots_score > detailed.lots_score);
        assert_eq!(
            detailed.difference,
            (detailed.hots_score - detailed.lots_score).abs()
        );
        assert!(detailed.difference >= 0.0);
    }

    #[actix_web::test]
    async fn classify_batch_matches_individual_calls() {
        let classifier = axis_classifier();
        let questions = vec![
            "Define osmosis.".to_string(),
            "".to_string(),
            "Design a bridge.".to_string(),
            "   ".to_string(),
            "Plants are green.".to_string(),
        ];

        let batch = classifier.classify_batch(&questions).await.unwrap();

        assert_eq!(batch.len(), questions.len());
        for (question, result) in questions.iter().zip(batch.iter()) {
            assert_eq!(&classifier.classify(question).await.unwrap(), result);
        }
    }

    #[actix_web::test]
    async fn classify_batch_uses_single_embedding_call_for_non_blank() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .times(1)
            .withf(|texts| texts.len() == 2)
            .returning(|texts| Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect()));
        let classifier = BloomClassifier::new(Arc::new(embedder), axis_keywords());

        let questions = vec!["List".to_string(), " ".to_string(), "Name".to_string()];
        let results = classifier.classify_batch(&questions).await.unwrap();

        assert_eq!(results[1], Classification::DEFAULT);
        assert_eq!(results[0].label, BloomLevel::Lots);
    }

    #[actix_web::test]
    async fn classify_batch_empty_input_is_empty() {
        let mut embedder = MockEmbedder::new();
        embedder.expect_embed().never();
        let classifier = BloomClassifier::new(Arc::new(embedder), axis_keywords());

        assert!(classifier.classify_batch(&[]).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn classify_surfaces_embedding_count_mismatch() {
        let mut embedder = MockEmbedder::new();
        embedder.expect_embed().returning(|_| Ok(vec![]));
        let classifier = BloomClassifier::new(Arc::new(embedder), axis_keywords());

        let err = classifier.classify("Define osmosis.").await.unwrap_err();
        assert!(matches!(err, AppError::EmbeddingError(_)));
    }

    #[actix_web::test]
    async fn classify_rejects_question_dimension_mismatch() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .returning(|texts| Ok(texts.iter().map(|_| vec![0.0, 1.0, 0.0]).collect()));
        let classifier = BloomClassifier::new(Arc::new(embedder), axis_keywords());

        let err = classifier.classify_detailed("Design a bridge").await.unwrap_err();
        assert!(matches!(err, AppError::EmbeddingError(_)));
        assert!(err.to_string().contains("dimension mismatch"));

        let batch = classifier
            .classify_batch(&["Design a bridge".to_string(), "".to_string()])
            .await;
        assert!(matches!(batch, Err(AppError::EmbeddingError(_))));
    }

    #[actix_web::test]
    async fn initialize_embeds_both_keyword_lists() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .times(2)
            .returning(|texts| Ok(texts.iter().map(|_| vec![0.5, 0.5]).collect()));

        let classifier = BloomClassifier::initialize(Arc::new(embedder)).await.unwrap();
        assert_eq!(classifier.keywords.dimension(), 2);
    }

    #[actix_web::test]
    async fn initialize_fails_when_provider_errors() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .returning(|_| Err(AppError::EmbeddingError("HTTP 401".to_string())));

        assert!(BloomClassifier::initialize(Arc::new(embedder)).await.is_err());
    }
}
