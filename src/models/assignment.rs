use crate::error::{AppResult, SubmissionError};
use crate::models::question::Question;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 作业附件类型（按扩展名识别）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Word 文档，需要抽取题目
    Docx,
    /// 已整理好的 JSON 题目列表
    Json,
    /// 已整理好的 TOML 题目列表
    Toml,
    /// 其它附件，不含题目
    Other,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("docx") => FileKind::Docx,
            Some("json") => FileKind::Json,
            Some("toml") => FileKind::Toml,
            _ => FileKind::Other,
        }
    }

    /// 是否可能携带题目
    pub fn carries_questions(self) -> bool {
        !matches!(self, FileKind::Other)
    }
}

/// 创建作业时表单提交的内容
#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: Option<String>,
    pub module: Option<String>,
    pub course: Option<String>,
    /// `YYYY-MM-DD`
    pub due_date: Option<String>,
    pub max_score: Option<u32>,
}

/// 作业
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub module: Option<String>,
    pub course: String,
    pub due_date: Option<NaiveDate>,
    pub max_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_kind: Option<FileKind>,
    /// 抽取 / 导入得到的题目，空列表不保存
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// 题目列表（没有题目时返回空切片）
    pub fn questions(&self) -> &[Question] {
        self.questions.as_deref().unwrap_or(&[])
    }

    /// 是否可以自动评分
    pub fn is_auto_graded(&self) -> bool {
        !self.questions().is_empty()
    }
}

/// 解析 `YYYY-MM-DD` 格式的截止日期
pub fn parse_due_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SubmissionError::InvalidDueDate {
            value: value.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(FileKind::from_path(Path::new("quiz.DOCX")), FileKind::Docx);
        assert_eq!(FileKind::from_path(Path::new("bank.json")), FileKind::Json);
        assert_eq!(FileKind::from_path(Path::new("bank.toml")), FileKind::Toml);
        assert_eq!(FileKind::from_path(Path::new("notes.pdf")), FileKind::Other);
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::Other);
        assert!(!FileKind::Other.carries_questions());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert!(parse_due_date("05/01/2024").is_err());
        assert!(parse_due_date("2024-13-01").is_err());
    }
}
