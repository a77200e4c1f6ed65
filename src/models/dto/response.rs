use serde::Serialize;

use crate::constants::blooms_keywords::{HOTS_KEYWORDS, LOTS_KEYWORDS};
use crate::models::domain::{DetailedClassification, Quiz};

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub quiz: Quiz,
    pub message: String,
}

impl GenerateQuizResponse {
    pub fn new(quiz: Quiz) -> Self {
        let message = if quiz.classification_stats.is_some() {
            "Quiz generated successfully with LOTS/HOTS classification"
        } else {
            "Quiz generated successfully"
        };
        Self {
            success: true,
            quiz,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReclassifyQuestionResponse {
    pub success: bool,
    pub classification: DetailedClassification,
}

#[derive(Debug, Serialize)]
pub struct KeywordLists {
    #[serde(rename = "LOTS")]
    pub lots: &'static [&'static str],
    #[serde(rename = "HOTS")]
    pub hots: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ClassificationKeywordsResponse {
    pub success: bool,
    pub keywords: KeywordLists,
}

impl Default for ClassificationKeywordsResponse {
    fn default() -> Self {
        Self {
            success: true,
            keywords: KeywordLists {
                lots: LOTS_KEYWORDS,
                hots: HOTS_KEYWORDS,
            },
        }
    }
}
