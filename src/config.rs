use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_AI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_QUIZ_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";
pub const MIN_API_KEY_LEN: usize = 30;

const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5174",
];

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub ai_api_base: String,
    pub quiz_model: String,
    pub embedding_api_base: String,
    pub embedding_api_key: SecretString,
    pub embedding_model: String,
    pub embedding_timeout: Duration,
    pub max_source_chars: usize,
    pub upload_dir: String,
    pub max_file_size: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let ai_api_base =
            env::var("AI_API_BASE").unwrap_or_else(|_| DEFAULT_AI_API_BASE.to_string());

        Self {
            embedding_api_base: env::var("EMBEDDING_API_BASE")
                .unwrap_or_else(|_| ai_api_base.clone()),
            embedding_api_key: SecretString::from(
                env::var("EMBEDDING_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty())
                    .unwrap_or_else(|| gemini_api_key.clone()),
            ),
            gemini_api_key: SecretString::from(gemini_api_key),
            ai_api_base,
            quiz_model: env::var("QUIZ_MODEL").unwrap_or_else(|_| DEFAULT_QUIZ_MODEL.to_string()),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_timeout: Duration::from_millis(
                env::var("EMBEDDING_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30_000),
            ),
            max_source_chars: env::var("MAX_SOURCE_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()),
            debug: env::var("DEBUG")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Refuse to run without a plausible AI service key.
    pub fn validate(&self) -> AppResult<()> {
        let key = self.gemini_api_key.expose_secret();

        if key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY not found in environment variables. \
                 Please create a .env file with GEMINI_API_KEY=your_key"
                    .to_string(),
            ));
        }

        if key.len() < MIN_API_KEY_LEN {
            return Err(AppError::ConfigError(format!(
                "GEMINI_API_KEY appears invalid (length: {}). Expected ~39 characters.",
                key.len()
            )));
        }

        if self.max_source_chars == 0 {
            return Err(AppError::ConfigError(
                "MAX_SOURCE_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn masked_api_key(&self) -> String {
        mask_secret(self.gemini_api_key.expose_secret())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test-gemini-key-0123456789abcdefghijkl".to_string()),
            ai_api_base: "http://127.0.0.1:9/v1".to_string(),
            quiz_model: DEFAULT_QUIZ_MODEL.to_string(),
            embedding_api_base: "http://127.0.0.1:9/v1".to_string(),
            embedding_api_key: SecretString::from("test-embedding-key".to_string()),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_timeout: Duration::from_millis(500),
            max_source_chars: 4000,
            upload_dir: env::temp_dir().to_string_lossy().into_owned(),
            max_file_size: 1024 * 1024,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            debug: false,
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn mask_secret(value: &str) -> String {
    if value.len() > 15 {
        let head: String = value.chars().take(10).collect();
        let tail: String = value.chars().skip(value.chars().count().saturating_sub(5)).collect();
        format!("{}...{}", head, tail)
    } else {
        "*".repeat(value.len())
    }
}
