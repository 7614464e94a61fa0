use crate::error::{AppError, AppResult};
use crate::models::assignment::FileKind;
use crate::models::question::{questions_from_json, Question};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// TOML 题库文件的结构：
///
/// ```toml
/// [[questions]]
/// question = "Q: 2 + 2?"
/// options = ["A: 3", "B: 4"]
/// correct_answer = "B: 4"
/// ```
#[derive(Debug, Deserialize)]
struct TomlQuestionBank {
    #[serde(default)]
    questions: Vec<Question>,
}

/// 从已整理好的 JSON / TOML 文件加载题目列表
///
/// 与 docx 抽取不同，这里的格式错误会直接返回错误
pub async fn load_questions_file(path: &Path) -> AppResult<Vec<Question>> {
    let kind = FileKind::from_path(path);
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    match kind {
        FileKind::Json => questions_from_json(&content),
        FileKind::Toml => {
            let bank: TomlQuestionBank = toml::from_str(&content)?;
            Ok(bank.questions)
        }
        FileKind::Docx | FileKind::Other => Err(AppError::unsupported_type(
            path.extension()
                .and_then(|s| s.to_str())
                .unwrap_or_default(),
        )),
    }
}

/// 扫描文件夹，返回所有可能携带题目的文件（按文件名排序）
pub async fn list_question_sources(
    folder_path: &Path,
    allowed: impl Fn(&str) -> bool,
) -> AppResult<Vec<PathBuf>> {
    if !folder_path.exists() {
        return Err(AppError::file_not_found(folder_path.display().to_string()));
    }

    let mut sources = Vec::new();
    let mut entries = fs::read_dir(folder_path)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path.display().to_string(), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path.display().to_string(), e))?
    {
        let path = entry.path();
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if !path.is_file() || !allowed(&file_name) {
            continue;
        }
        if FileKind::from_path(&path).carries_questions() {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}
