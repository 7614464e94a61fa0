//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档导入器
//! - 扫描目录，批量加载文档（Vec<PathBuf>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 委托 AssignmentFlow 导入作业
//! - 写出题目 JSON
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! document_processor (处理单个文档)
//!     ↓
//! workflow::AssignmentFlow
//!     ↓
//! services (能力层：extractor / scorer)
//!     ↓
//! models::loaders (docx / JSON / TOML)
//! ```

pub mod batch_processor;
pub mod document_processor;

pub use batch_processor::{App, ImportStats};
pub use document_processor::{process_document, DocumentReport};
