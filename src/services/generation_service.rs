use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    constants::quiz_prompt::{build_quiz_prompt, QUIZ_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::dto::{quiz_dto::RawQuiz, request::GenerationCounts},
};

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 8192;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$").expect("CODE_FENCE is a valid regex pattern")
});

/// Turns source text into raw quiz questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, text: &str, counts: &GenerationCounts) -> AppResult<RawQuiz>;
}

/// Chat-completions backed generator for any OpenAI-compatible endpoint.
pub struct OpenAiQuizGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    max_source_chars: usize,
    schema: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiQuizGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.gemini_api_key.expose_secret())
            .with_api_base(config.ai_api_base.trim_end_matches('/'));

        Self {
            client: Client::with_config(openai_config),
            model: config.quiz_model.clone(),
            max_source_chars: config.max_source_chars,
            schema: RawQuiz::json_schema(),
        }
    }

    fn request_body(&self, text: &str, counts: &GenerationCounts) -> serde_json::Value {
        let prompt = build_quiz_prompt(
            text,
            counts.num_multiple_choice,
            counts.num_true_false,
            counts.num_identification,
            self.max_source_chars,
            &self.schema,
        );

        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
            "max_tokens": MAX_OUTPUT_TOKENS,
        })
    }
}

#[async_trait]
impl QuizGenerator for OpenAiQuizGenerator {
    async fn generate(&self, text: &str, counts: &GenerationCounts) -> AppResult<RawQuiz> {
        let request = self.request_body(text, counts);

        let response: ChatCompletionBody = self.client.chat().create_byot(request).await.map_err(|e| {
            log::error!("Quiz generation request failed: {}", e);
            AppError::from(e)
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::GenerationError("model returned no choices".to_string()))?;

        let content = choice.message.content.filter(|c| !c.trim().is_empty()).ok_or_else(|| {
            AppError::GenerationError(format!(
                "model returned an empty message (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        parse_generated_quiz(&content)
    }
}

/// Removes a surrounding markdown code fence, if any.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed)
}

pub fn parse_generated_quiz(content: &str) -> AppResult<RawQuiz> {
    let cleaned = strip_code_fences(content);

    let quiz: RawQuiz = serde_json::from_str(cleaned).map_err(|e| {
        log::error!("JSON parse error: {}", e);
        log::debug!("Response text: {}", cleaned);
        AppError::from(e)
    })?;

    quiz.validate_answers()?;
    Ok(quiz)
}
