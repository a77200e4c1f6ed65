#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::quiz_dto::{
        RawIdentification, RawMultipleChoice, RawQuiz, RawTrueFalse,
    };

    pub fn multiple_choice(question: &str, correct_answer: usize, points: Option<u32>) -> RawMultipleChoice {
        RawMultipleChoice {
            question: question.to_string(),
            choices: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer,
            points,
        }
    }

    pub fn true_false(question: &str, correct_answer: bool, points: Option<u32>) -> RawTrueFalse {
        RawTrueFalse {
            question: question.to_string(),
            correct_answer,
            points,
        }
    }

    pub fn identification(question: &str, answer: &str, points: Option<u32>) -> RawIdentification {
        RawIdentification {
            question: question.to_string(),
            correct_answer: answer.to_string(),
            points,
        }
    }

    /// 3 multiple choice, 2 true/false, 1 identification, no explicit points.
    pub fn sample_raw_quiz() -> RawQuiz {
        RawQuiz {
            multiple_choice: vec![
                multiple_choice("What is the capital of France?", 0, None),
                multiple_choice("Which gas do plants absorb?", 1, None),
                multiple_choice("Compare and contrast mitosis and meiosis.", 2, None),
            ],
            true_false: vec![
                true_false("The sun is a star.", true, None),
                true_false("Water boils at 50 degrees Celsius at sea level.", false, None),
            ],
            identification: vec![identification(
                "Name the powerhouse of the cell.",
                "Mitochondria",
                None,
            )],
        }
    }
}

#[cfg(test)]
pub mod fakes {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        errors::AppResult,
        services::{
            classifier_service::{BloomClassifier, KeywordEmbeddings},
            embedding_service::Embedder,
        },
    };

    const LOWER_ORDER_CUES: &[&str] = &[
        "define", "list", "name", "identify", "what", "which", "recall", "state",
    ];
    const HIGHER_ORDER_CUES: &[&str] = &[
        "design", "evaluate", "compare", "analyze", "create", "justify", "why", "propose",
    ];

    /// Deterministic 2-D embedder: lower-order cues point along x, higher-order
    /// cues along y, anything else on the diagonal.
    pub struct AxisEmbedder;

    impl AxisEmbedder {
        pub fn vector_for(text: &str) -> Vec<f32> {
            let lowered = text.to_lowercase();
            let words: Vec<&str> = lowered
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .collect();

            let hots = words.iter().any(|w| HIGHER_ORDER_CUES.contains(w));
            let lots = words.iter().any(|w| LOWER_ORDER_CUES.contains(w));

            match (lots, hots) {
                (_, true) => vec![0.0, 1.0],
                (true, false) => vec![1.0, 0.0],
                (false, false) => vec![1.0, 1.0],
            }
        }
    }

    #[async_trait]
    impl Embedder for AxisEmbedder {
        async fn embed(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|t| Self::vector_for(t)).collect())
        }
    }

    /// Keyword vectors mirrored across the diagonal, so `[1, 1]` is an exact tie.
    pub fn axis_keywords() -> Arc<KeywordEmbeddings> {
        Arc::new(
            KeywordEmbeddings::new(
                vec![vec![1.0, 0.0], vec![0.9, 0.1]],
                vec![vec![0.0, 1.0], vec![0.1, 0.9]],
            )
            .unwrap(),
        )
    }

    pub fn axis_classifier() -> BloomClassifier {
        BloomClassifier::new(Arc::new(AxisEmbedder), axis_keywords())
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::AxisEmbedder;
    use super::fixtures::*;

    #[test]
    fn test_sample_raw_quiz_shape() {
        let raw = sample_raw_quiz();
        assert_eq!(raw.multiple_choice.len(), 3);
        assert_eq!(raw.true_false.len(), 2);
        assert_eq!(raw.identification.len(), 1);
        assert!(raw.validate_answers().is_ok());
    }

    #[test]
    fn test_axis_embedder_cues() {
        assert_eq!(AxisEmbedder::vector_for("Define osmosis."), vec![1.0, 0.0]);
        assert_eq!(AxisEmbedder::vector_for("Design a bridge"), vec![0.0, 1.0]);
        assert_eq!(AxisEmbedder::vector_for("Plants are green"), vec![1.0, 1.0]);
        assert_eq!(AxisEmbedder::vector_for("Whatever happens"), vec![1.0, 1.0]);
    }
}
