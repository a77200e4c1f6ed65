pub mod classifier_service;
pub mod embedding_service;
pub mod generation_service;
pub mod pdf_service;
pub mod quiz_assembly;
pub mod quiz_service;

pub use classifier_service::{BloomClassifier, KeywordEmbeddings};
pub use embedding_service::{Embedder, OpenAiCompatibleEmbedder};
pub use generation_service::{OpenAiQuizGenerator, QuizGenerator};
pub use pdf_service::{PdfTextExtractor, TextExtractor};
pub use quiz_service::QuizService;
