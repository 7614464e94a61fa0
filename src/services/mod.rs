pub mod extractor;
pub mod scorer;

pub use extractor::{LineKind, QuestionExtractor};
pub use scorer::ExamScorer;
