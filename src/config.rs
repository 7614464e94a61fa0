use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 作业默认满分
    pub default_max_score: u32,
    /// 默认课程
    pub default_course: String,
    /// 上传根目录
    pub upload_folder: String,
    /// 作业文件子目录
    pub assignments_folder: String,
    /// 允许上传的扩展名（小写，不含点）
    pub allowed_extensions: Vec<String>,
    /// 单个文件大小上限（字节）
    pub max_content_length: u64,
    /// 题目 JSON 输出目录
    pub output_folder: String,
    /// 同时导入的文档数量
    pub max_concurrent_imports: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_max_score: 100,
            default_course: "CNA".to_string(),
            upload_folder: "static/uploads".to_string(),
            assignments_folder: "assignments".to_string(),
            allowed_extensions: [
                "txt", "pdf", "png", "jpg", "jpeg", "gif", "docx", "json", "mp4", "avi", "mov",
                "wmv", "pptx", "zip", "toml",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
            max_content_length: 16 * 1024 * 1024,
            output_folder: "output_questions".to_string(),
            max_concurrent_imports: 8,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值，随后再应用环境变量覆盖
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        let base = self;
        Self {
            default_max_score: env_parse("DEFAULT_MAX_SCORE").unwrap_or(base.default_max_score),
            default_course: std::env::var("DEFAULT_COURSE").unwrap_or(base.default_course),
            upload_folder: std::env::var("UPLOAD_FOLDER").unwrap_or(base.upload_folder),
            assignments_folder: std::env::var("ASSIGNMENTS_FOLDER")
                .unwrap_or(base.assignments_folder),
            allowed_extensions: base.allowed_extensions,
            max_content_length: env_parse("MAX_CONTENT_LENGTH")
                .unwrap_or(base.max_content_length),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(base.output_folder),
            max_concurrent_imports: env_parse("MAX_CONCURRENT_IMPORTS")
                .unwrap_or(base.max_concurrent_imports),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(base.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(base.output_log_file),
        }
    }

    /// 作业文件所在目录（批量导入默认扫描此目录）
    pub fn assignments_dir(&self) -> PathBuf {
        Path::new(&self.upload_folder).join(&self.assignments_folder)
    }

    /// 文件扩展名是否在允许列表内（大小写不敏感）
    pub fn is_allowed(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

/// 读取并解析环境变量，缺失或格式错误时返回 `None`
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_max_score, 100);
        assert_eq!(config.default_course, "CNA");
        assert_eq!(config.max_content_length, 16 * 1024 * 1024);
        assert_eq!(
            config.assignments_dir(),
            Path::new("static/uploads").join("assignments")
        );
    }

    #[test]
    fn test_is_allowed() {
        let config = Config::default();
        assert!(config.is_allowed("quiz.docx"));
        assert!(config.is_allowed("Quiz.DOCX"));
        assert!(config.is_allowed("bank.json"));
        assert!(!config.is_allowed("script.exe"));
        assert!(!config.is_allowed("no_extension"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config =
            toml::from_str("default_max_score = 50\nverbose_logging = true\n").unwrap();
        assert_eq!(config.default_max_score, 50);
        assert!(config.verbose_logging);
        assert_eq!(config.upload_folder, "static/uploads");
    }

    #[test]
    fn test_env_parse_ignores_malformed_values() {
        std::env::set_var("ASSIGNMENT_QUIZ_TEST_NUMBER", " 42 ");
        std::env::set_var("ASSIGNMENT_QUIZ_TEST_BROKEN", "forty-two");
        assert_eq!(env_parse::<u32>("ASSIGNMENT_QUIZ_TEST_NUMBER"), Some(42));
        assert_eq!(env_parse::<u32>("ASSIGNMENT_QUIZ_TEST_BROKEN"), None);
        assert_eq!(env_parse::<u32>("ASSIGNMENT_QUIZ_TEST_MISSING"), None);
    }
}
