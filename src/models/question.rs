use crate::error::AppResult;
use serde::{Deserialize, Serialize};

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 选择题
    #[default]
    MultipleChoice,
}

/// 单道测验题
///
/// 字段名沿用存储格式：`question` / `options` / `correct_answer` / `question_type` / `points`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,

    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub correct_answer: String,

    #[serde(rename = "question_type", default)]
    pub kind: QuestionType,

    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl Question {
    /// 以题干创建一道新题：无选项、无答案、选择题、1 分
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
            correct_answer: String::new(),
            kind: QuestionType::MultipleChoice,
            points: default_points(),
        }
    }
}

/// 第 `index` 题对应的表单字段名
pub fn answer_key(index: usize) -> String {
    format!("question_{}", index)
}

/// 序列化题目列表（存储格式）
pub fn questions_to_json(questions: &[Question]) -> AppResult<String> {
    Ok(serde_json::to_string(questions)?)
}

/// 反序列化题目列表
pub fn questions_from_json(json: &str) -> AppResult<Vec<Question>> {
    Ok(serde_json::from_str(json)?)
}
