pub mod assignment_flow;
pub mod exam_flow;
pub mod import_ctx;

pub use assignment_flow::AssignmentFlow;
pub use exam_flow::ExamFlow;
pub use import_ctx::ImportCtx;
