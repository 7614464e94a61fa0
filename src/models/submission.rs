use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 学生提交的答案：`question_{i}` → 选择的答案
pub type AnswerMap = BTreeMap<String, String>;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// 已提交，等待人工批改
    Submitted,
    /// 已自动评分
    Graded,
}

/// 评分结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub score: Option<f64>,
    pub status: SubmissionStatus,
}

impl SubmissionOutcome {
    /// 无题目可自动评分
    pub fn manual() -> Self {
        Self {
            score: None,
            status: SubmissionStatus::Submitted,
        }
    }

    pub fn graded(score: f64) -> Self {
        Self {
            score: Some(score),
            status: SubmissionStatus::Graded,
        }
    }

    /// 提交后展示给学生的提示语
    pub fn message(&self) -> String {
        match self.score {
            Some(score) => format!("Exam submitted! Your score: {:.1}%", score),
            None => "Exam submitted successfully! It will be graded manually.".to_string(),
        }
    }
}

/// 一次考试提交记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSubmission {
    pub assignment_id: u64,
    pub student_id: u64,
    pub answers: AnswerMap,
    pub score: Option<f64>,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}
