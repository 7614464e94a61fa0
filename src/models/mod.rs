pub mod assignment;
pub mod loaders;
pub mod question;
pub mod submission;

pub use assignment::{parse_due_date, Assignment, AssignmentDraft, FileKind};
pub use loaders::{list_question_sources, load_questions_file, DocxLoader};
pub use question::{answer_key, questions_from_json, questions_to_json, Question, QuestionType};
pub use submission::{AnswerMap, ExamSubmission, SubmissionOutcome, SubmissionStatus};
