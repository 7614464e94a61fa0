//! 作业导入流程 - 流程层
//!
//! 核心职责：把表单内容 + 附件变成一个 `Assignment`
//!
//! 流程顺序：
//! 1. 校验标题、解析截止日期
//! 2. 按附件类型加载题目（docx 抽取 / JSON / TOML）
//! 3. 非空题目列表才保存到作业上

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::SubmissionError;
use crate::models::assignment::{parse_due_date, Assignment, AssignmentDraft, FileKind};
use crate::models::loaders::{load_questions_file, DocxLoader};
use crate::models::question::Question;
use crate::services::QuestionExtractor;

/// 作业导入流程
#[derive(Debug, Clone)]
pub struct AssignmentFlow {
    extractor: QuestionExtractor,
    default_max_score: u32,
    default_course: String,
    max_content_length: u64,
}

impl AssignmentFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: QuestionExtractor::new(),
            default_max_score: config.default_max_score,
            default_course: config.default_course.clone(),
            max_content_length: config.max_content_length,
        }
    }

    /// 从 docx 中抽取题目
    ///
    /// 读取或解析失败不会返回错误，只记录警告并返回空列表
    pub fn extract_from_docx(&self, path: &Path) -> Vec<Question> {
        let loader = DocxLoader::new(self.max_content_length);
        match loader.load_paragraphs(path) {
            Ok(paragraphs) => self.extractor.extract(paragraphs),
            Err(e) => {
                warn!("⚠️ 解析 DOCX 失败 {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// 按附件类型加载题目，没有题目时返回 `None`
    ///
    /// docx 抽取失败视为"没有题目"；JSON / TOML 格式错误则返回错误
    pub async fn load_questions(&self, path: &Path) -> Result<Option<Vec<Question>>> {
        let questions = match FileKind::from_path(path) {
            FileKind::Docx => {
                let flow = self.clone();
                let owned = path.to_path_buf();
                tokio::task::spawn_blocking(move || flow.extract_from_docx(&owned))
                    .await
                    .context("docx 抽取任务执行失败")?
            }
            FileKind::Json | FileKind::Toml => load_questions_file(path)
                .await
                .with_context(|| format!("题目文件格式错误: {}", path.display()))?,
            FileKind::Other => return Ok(None),
        };

        if questions.is_empty() {
            info!("📭 {} 中没有识别到题目", path.display());
            Ok(None)
        } else {
            info!("✓ 从 {} 中得到 {} 道题目", path.display(), questions.len());
            Ok(Some(questions))
        }
    }

    /// 创建作业
    ///
    /// # 参数
    /// - `id`: 作业ID（由外部存储分配）
    /// - `draft`: 表单内容
    /// - `attachment`: 可选的附件路径
    pub async fn import(
        &self,
        id: u64,
        draft: AssignmentDraft,
        attachment: Option<&Path>,
    ) -> Result<Assignment> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(SubmissionError::EmptyTitle.into());
        }

        let due_date = match draft.due_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(parse_due_date(value)?),
            _ => None,
        };

        let (filename, file_kind, questions) = match attachment {
            Some(path) => {
                let questions = self.load_questions(path).await?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string());
                (filename, Some(FileKind::from_path(path)), questions)
            }
            None => (None, None, None),
        };

        Ok(Assignment {
            id,
            title,
            description: draft.description,
            module: draft.module,
            course: draft
                .course
                .unwrap_or_else(|| self.default_course.clone()),
            due_date,
            max_score: draft.max_score.unwrap_or(self.default_max_score),
            filename,
            file_kind,
            questions,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> AssignmentFlow {
        AssignmentFlow::new(&Config::default())
    }

    #[test]
    fn test_unreadable_docx_yields_no_questions() {
        let dir = std::env::temp_dir().join(format!("assignment_quiz_flow_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert!(flow().extract_from_docx(&path).is_empty());
    }

    #[test]
    fn test_oversized_or_bodyless_docx_yields_no_questions() {
        use crate::models::loaders::docx_loader::tests::{docx_bytes, zip_bytes};

        let dir = std::env::temp_dir().join(format!(
            "assignment_quiz_flow_limits_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let quiz = docx_bytes(r#"<w:p><w:r><w:t>Q: 2 + 2?</w:t></w:r></w:p>"#);
        let large = dir.join("large.docx");
        std::fs::write(&large, &quiz).unwrap();
        let small_limit = AssignmentFlow::new(&Config {
            max_content_length: 16,
            ..Config::default()
        });
        assert!(small_limit.extract_from_docx(&large).is_empty());
        assert_eq!(flow().extract_from_docx(&large).len(), 1);

        let bodyless = dir.join("bodyless.docx");
        std::fs::write(&bodyless, zip_bytes(&[("word/styles.xml", "<w:styles/>")])).unwrap();
        assert!(flow().extract_from_docx(&bodyless).is_empty());
    }

    #[tokio::test]
    async fn test_import_without_attachment() {
        let draft = AssignmentDraft {
            title: "  Week 1  ".to_string(),
            due_date: Some("2024-09-30".to_string()),
            ..Default::default()
        };

        let assignment = flow().import(7, draft, None).await.unwrap();
        assert_eq!(assignment.id, 7);
        assert_eq!(assignment.title, "Week 1");
        assert_eq!(assignment.course, "CNA");
        assert_eq!(assignment.max_score, 100);
        assert!(assignment.questions.is_none());
        assert!(!assignment.is_auto_graded());
    }

    #[tokio::test]
    async fn test_import_rejects_empty_title_and_bad_date() {
        let draft = AssignmentDraft::default();
        assert!(flow().import(1, draft, None).await.is_err());

        let draft = AssignmentDraft {
            title: "Quiz".to_string(),
            due_date: Some("30/09/2024".to_string()),
            ..Default::default()
        };
        assert!(flow().import(1, draft, None).await.is_err());
    }
}
