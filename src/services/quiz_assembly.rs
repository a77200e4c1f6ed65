use crate::models::{
    domain::{ChoiceOption, Classification, ClassificationStats, Question, QuestionKind, Quiz},
    dto::quiz_dto::RawQuiz,
};

/// Normalizes a generated quiz: multiple choice first, then true/false, then
/// identification, each group in model order.
pub fn assemble_quiz(raw: RawQuiz, title: impl Into<String>) -> Quiz {
    let mut questions = Vec::with_capacity(raw.question_count());

    for mc in raw.multiple_choice {
        let choices = mc
            .choices
            .into_iter()
            .enumerate()
            .map(|(i, text)| ChoiceOption {
                text,
                is_correct: i == mc.correct_answer,
            })
            .collect();
        questions.push(Question::new(
            QuestionKind::MultipleChoice { choices },
            mc.question,
            mc.points,
        ));
    }

    for tf in raw.true_false {
        questions.push(Question::new(
            QuestionKind::TrueFalse {
                correct_answer: tf.correct_answer.into(),
            },
            tf.question,
            tf.points,
        ));
    }

    for id in raw.identification {
        questions.push(Question::new(
            QuestionKind::Identification {
                correct_answer: id.correct_answer,
            },
            id.question,
            id.points,
        ));
    }

    Quiz::new(title, questions)
}

/// Attaches one classification per question, in order, and recomputes the stats.
pub fn apply_classifications(quiz: &mut Quiz, classifications: &[Classification]) {
    for (question, classification) in quiz.questions.iter_mut().zip(classifications) {
        question.apply_classification(*classification);
    }

    let stats = ClassificationStats::from_labels(
        quiz.questions
            .iter()
            .filter_map(|q| q.bloom_classification.as_ref()),
    );
    quiz.classification_stats = Some(stats);
}
