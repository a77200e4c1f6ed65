use serde::{Deserialize, Serialize};

use crate::models::domain::classification::{BloomLevel, Classification};

pub const DEFAULT_MULTIPLE_CHOICE_POINTS: u32 = 2;
pub const DEFAULT_TRUE_FALSE_POINTS: u32 = 1;
pub const DEFAULT_IDENTIFICATION_POINTS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub question: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom_classification: Option<BloomLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_confidence: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { choices: Vec<ChoiceOption> },
    TrueFalse { correct_answer: TrueFalseAnswer },
    Identification { correct_answer: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum TrueFalseAnswer {
    True,
    False,
}

impl From<bool> for TrueFalseAnswer {
    fn from(value: bool) -> Self {
        if value {
            TrueFalseAnswer::True
        } else {
            TrueFalseAnswer::False
        }
    }
}

impl QuestionKind {
    pub fn default_points(&self) -> u32 {
        match self {
            QuestionKind::MultipleChoice { .. } => DEFAULT_MULTIPLE_CHOICE_POINTS,
            QuestionKind::TrueFalse { .. } => DEFAULT_TRUE_FALSE_POINTS,
            QuestionKind::Identification { .. } => DEFAULT_IDENTIFICATION_POINTS,
        }
    }
}

impl Question {
    /// Builds a question, falling back to the per-type default when `points` is unset.
    pub fn new(kind: QuestionKind, question: impl Into<String>, points: Option<u32>) -> Self {
        let points = points.unwrap_or_else(|| kind.default_points());
        Self {
            kind,
            question: question.into(),
            points,
            bloom_classification: None,
            classification_confidence: None,
        }
    }

    pub fn apply_classification(&mut self, classification: Classification) {
        self.bloom_classification = Some(classification.label);
        self.classification_confidence = Some(round_to(classification.confidence, 4));
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
