pub mod classification;
pub mod quiz;
pub mod quiz_question;
pub use classification::{BloomLevel, Classification, DetailedClassification};
pub use quiz::{ClassificationStats, Quiz};
pub use quiz_question::{ChoiceOption, Question, QuestionKind, TrueFalseAnswer};
