//! # Assignment Quiz
//!
//! 作业测验核心：从上传的文档中抽取选择题，并对学生提交的答案评分
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、作业、提交记录，以及 docx / JSON / TOML 加载器
//!
//! ### ② 业务能力层（Services）
//! - `QuestionExtractor` - 按段落前缀抽取题目
//! - `ExamScorer` - 按分值比例计算得分
//!
//! ### ③ 流程层（Workflow）
//! - `AssignmentFlow` - 表单 + 附件 → 作业
//! - `ExamFlow` - 提交答案（同一学生同一作业只允许一次）→ 评分记录
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量导入目录中的文档
//! - `orchestrator/document_processor` - 单个文档的导入与输出

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerMap, Assignment, Question, SubmissionOutcome, SubmissionStatus};
pub use orchestrator::App;
pub use services::{ExamScorer, QuestionExtractor};
pub use workflow::{AssignmentFlow, ExamFlow, ImportCtx};
