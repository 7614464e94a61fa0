use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档读取相关错误
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 题目列表存取错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 作业 / 提交相关的业务错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 文档读取错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文件超过大小限制
    #[error("文件过大 ({path}): {size} 字节，上限 {limit} 字节")]
    TooLarge { path: String, size: u64, limit: u64 },
    /// 不支持的文件类型
    #[error("不支持的文件类型: {extension}")]
    UnsupportedType { extension: String },
    /// 不是合法的 docx 压缩包
    #[error("无法打开 docx 压缩包: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),
    /// docx 中缺少正文
    #[error("docx 中缺少 word/document.xml: {path}")]
    MissingBody { path: String },
    /// 正文 XML 无法解析
    #[error("docx 解析失败 ({path}): {message}")]
    ParseFailed { path: String, message: String },
}

/// 题目列表存取错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 作业 / 提交相关的业务错误
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 作业标题为空
    #[error("作业标题不能为空")]
    EmptyTitle,
    /// 截止日期格式错误
    #[error("截止日期格式错误，应为 YYYY-MM-DD: {value}")]
    InvalidDueDate { value: String },
    /// 同一学生重复提交同一作业
    #[error("学生 {student_id} 已提交过作业 {assignment_id}")]
    AlreadySubmitted { assignment_id: u64, student_id: u64 },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("配置文件读取失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(StorageError::Json(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Storage(StorageError::Toml(err))
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Document(DocumentError::InvalidContainer(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Document(DocumentError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件不存在错误
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::Document(DocumentError::NotFound { path: path.into() })
    }

    /// 创建不支持的文件类型错误
    pub fn unsupported_type(extension: impl Into<String>) -> Self {
        AppError::Document(DocumentError::UnsupportedType {
            extension: extension.into(),
        })
    }

    /// 创建重复提交错误
    pub fn already_submitted(assignment_id: u64, student_id: u64) -> Self {
        AppError::Submission(SubmissionError::AlreadySubmitted {
            assignment_id,
            student_id,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_display() {
        let err = AppError::already_submitted(3, 7);
        assert_eq!(err.to_string(), "提交错误: 学生 7 已提交过作业 3");

        let err = AppError::unsupported_type("pdf");
        assert_eq!(err.to_string(), "文档错误: 不支持的文件类型: pdf");
    }

    #[test]
    fn test_json_error_converts_to_storage() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Storage(StorageError::Json(_))));
    }

    #[test]
    fn test_read_failed_names_the_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::file_read_failed("uploads/assignments", io_err);
        assert_eq!(
            err.to_string(),
            "文档错误: 读取文件失败 (uploads/assignments): denied"
        );
    }
}
