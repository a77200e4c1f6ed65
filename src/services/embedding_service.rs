use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Maps text to fixed-length vectors. One output per input, same order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>>;
}

/// Client for any `/embeddings` endpoint that speaks the OpenAI wire format.
pub struct OpenAiCompatibleEmbedder {
    client: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl OpenAiCompatibleEmbedder {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.embedding_timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.embedding_api_base.trim_end_matches('/').to_string(),
            api_key: config.embedding_api_key.clone(),
            model: config.embedding_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for OpenAiCompatibleEmbedder {
    async fn embed(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/embeddings", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&EmbeddingRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Embedding request failed with HTTP {}: {}", status, body);
            return Err(AppError::EmbeddingError(format!("HTTP {}: {}", status, body)));
        }

        let body: EmbeddingResponse = response.json().await?;
        order_embeddings(body.data, texts.len())
    }
}

/// Restores input order when the provider reports indices, then checks shape.
fn order_embeddings(mut items: Vec<EmbeddingItem>, expected: usize) -> AppResult<Vec<Vec<f32>>> {
    if items.len() != expected {
        return Err(AppError::EmbeddingError(format!(
            "count mismatch: expected {}, got {}",
            expected,
            items.len()
        )));
    }

    if items.iter().all(|item| item.index.is_some()) {
        items.sort_by_key(|item| item.index);

        let is_permutation = items
            .iter()
            .enumerate()
            .all(|(position, item)| item.index == Some(position));
        if !is_permutation {
            return Err(AppError::EmbeddingError(format!(
                "invalid embedding indices: expected each of 0..{} exactly once",
                expected
            )));
        }
    }

    let vectors: Vec<Vec<f32>> = items.into_iter().map(|item| item.embedding).collect();
    ensure_uniform_dimension(&vectors)?;
    Ok(vectors)
}

pub fn ensure_uniform_dimension(vectors: &[Vec<f32>]) -> AppResult<usize> {
    let dimension = vectors.first().map(Vec::len).unwrap_or(0);

    if vectors.iter().any(|v| v.is_empty()) {
        return Err(AppError::EmbeddingError("empty embedding vector".to_string()));
    }

    if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
        return Err(AppError::EmbeddingError(format!(
            "dimension mismatch: expected {}, got {}",
            dimension,
            bad.len()
        )));
    }

    Ok(dimension)
}
