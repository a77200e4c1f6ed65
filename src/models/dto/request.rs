use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

pub const DEFAULT_QUIZ_TITLE: &str = "Generated Quiz";
pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const MAX_QUESTIONS_PER_TYPE: u32 = 50;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReclassifyQuestionRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question: String,
}

/// `null` is treated like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
#[validate(schema(function = "validate_total_questions"))]
pub struct GenerationCounts {
    #[validate(range(max = MAX_QUESTIONS_PER_TYPE))]
    pub num_multiple_choice: u32,
    #[validate(range(max = MAX_QUESTIONS_PER_TYPE))]
    pub num_true_false: u32,
    #[validate(range(max = MAX_QUESTIONS_PER_TYPE))]
    pub num_identification: u32,
}

impl GenerationCounts {
    pub fn new(num_multiple_choice: u32, num_true_false: u32, num_identification: u32) -> Self {
        Self {
            num_multiple_choice,
            num_true_false,
            num_identification,
        }
    }

    pub fn total(&self) -> u32 {
        self.num_multiple_choice + self.num_true_false + self.num_identification
    }
}

impl Default for GenerationCounts {
    fn default() -> Self {
        Self::new(
            DEFAULT_QUESTION_COUNT,
            DEFAULT_QUESTION_COUNT,
            DEFAULT_QUESTION_COUNT,
        )
    }
}

fn validate_total_questions(counts: &GenerationCounts) -> Result<(), ValidationError> {
    if counts.total() == 0 {
        let mut err = ValidationError::new("total_questions");
        err.message = Some("At least one question must be requested".into());
        return Err(err);
    }
    Ok(())
}

/// Multipart body of `POST /api/quiz/generate-from-pdf`.
#[derive(MultipartForm)]
pub struct GenerateQuizForm {
    pub file: TempFile,
    pub title: Option<Text<String>>,
    pub num_multiple_choice: Option<Text<u32>>,
    pub num_true_false: Option<Text<u32>>,
    pub num_identification: Option<Text<u32>>,
    pub classify: Option<Text<bool>>,
}

impl GenerateQuizForm {
    pub fn file_name(&self) -> Option<&str> {
        self.file.file_name.as_deref()
    }

    pub fn title(&self) -> String {
        self.title
            .as_ref()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_QUIZ_TITLE.to_string())
    }

    pub fn counts(&self) -> GenerationCounts {
        let count = |field: &Option<Text<u32>>| field.as_ref().map(|v| **v).unwrap_or(DEFAULT_QUESTION_COUNT);
        GenerationCounts::new(
            count(&self.num_multiple_choice),
            count(&self.num_true_false),
            count(&self.num_identification),
        )
    }

    pub fn classify(&self) -> bool {
        self.classify.as_ref().map(|v| **v).unwrap_or(true)
    }
}

/// Only the extension is checked; the parser rejects anything else later.
pub fn is_pdf_filename(file_name: &str) -> bool {
    file_name.trim().to_ascii_lowercase().ends_with(".pdf")
}
