//! Quiz shape emitted by the generative model, before normalization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Upper bound on a model-supplied `points` value.
pub const MAX_QUESTION_POINTS: u32 = 100;

/// Every list is required; a missing key is a generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RawQuiz {
    pub multiple_choice: Vec<RawMultipleChoice>,
    pub true_false: Vec<RawTrueFalse>,
    pub identification: Vec<RawIdentification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RawMultipleChoice {
    pub question: String,
    /// Exactly four answer options.
    pub choices: Vec<String>,
    /// Zero-based index into `choices`.
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RawTrueFalse {
    pub question: String,
    pub correct_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RawIdentification {
    pub question: String,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl RawQuiz {
    pub fn question_count(&self) -> usize {
        self.multiple_choice.len() + self.true_false.len() + self.identification.len()
    }

    /// Checks the constraints serde cannot express.
    pub fn validate_answers(&self) -> AppResult<()> {
        let points = self
            .multiple_choice
            .iter()
            .map(|q| q.points)
            .chain(self.true_false.iter().map(|q| q.points))
            .chain(self.identification.iter().map(|q| q.points));
        if let Some(bad) = points.flatten().find(|p| *p > MAX_QUESTION_POINTS) {
            return Err(AppError::GenerationError(format!(
                "question points {} exceed the maximum of {}",
                bad, MAX_QUESTION_POINTS
            )));
        }

        for (i, mc) in self.multiple_choice.iter().enumerate() {
            if mc.choices.len() < 2 {
                return Err(AppError::GenerationError(format!(
                    "multiple_choice[{}] has {} choices, expected at least 2",
                    i,
                    mc.choices.len()
                )));
            }
            if mc.correct_answer >= mc.choices.len() {
                return Err(AppError::GenerationError(format!(
                    "multiple_choice[{}] correct_answer {} is out of range for {} choices",
                    i,
                    mc.correct_answer,
                    mc.choices.len()
                )));
            }
        }
        Ok(())
    }

    pub fn json_schema() -> String {
        let schema = schemars::schema_for!(RawQuiz);
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
    }
}
