pub mod docx_loader;
pub mod question_loader;

pub use docx_loader::{paragraphs_from_docx, DocxLoader};
pub use question_loader::{list_question_sources, load_questions_file};
