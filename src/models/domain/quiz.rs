use serde::{Deserialize, Serialize};

use crate::models::domain::classification::BloomLevel;
use crate::models::domain::quiz_question::{round_to, Question};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
    pub total_points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_stats: Option<ClassificationStats>,
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        let total_points = questions.iter().map(|q| u64::from(q.points)).sum();
        Self {
            title: title.into(),
            questions,
            total_points,
            classification_stats: None,
        }
    }

    pub fn question_texts(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.question.clone()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ClassificationStats {
    pub total_questions: usize,
    pub lots_count: usize,
    pub hots_count: usize,
    pub lots_percentage: f64,
    pub hots_percentage: f64,
}

impl ClassificationStats {
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a BloomLevel>) -> Self {
        let (mut lots_count, mut hots_count) = (0usize, 0usize);
        for label in labels {
            match label {
                BloomLevel::Lots => lots_count += 1,
                BloomLevel::Hots => hots_count += 1,
            }
        }
        let total_questions = lots_count + hots_count;

        Self {
            total_questions,
            lots_count,
            hots_count,
            lots_percentage: percentage(lots_count, total_questions),
            hots_percentage: percentage(hots_count, total_questions),
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, 2)
}
