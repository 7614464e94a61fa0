//! 文档导入上下文
//!
//! 封装"我正在导入第几个文档"这一信息

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 文档导入上下文
#[derive(Debug, Clone)]
pub struct ImportCtx {
    /// 文档索引（从1开始，同时作为作业ID）
    pub import_index: usize,

    /// 源文件路径
    pub source: PathBuf,
}

impl ImportCtx {
    pub fn new(import_index: usize, source: impl Into<PathBuf>) -> Self {
        Self {
            import_index,
            source: source.into(),
        }
    }

    /// 不含扩展名的文件名，用作作业标题和输出文件名
    pub fn stem(&self) -> String {
        self.source
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl Display for ImportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 #{} {}]",
            self.import_index,
            self.source
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_stem() {
        let ctx = ImportCtx::new(3, "uploads/week1 quiz.docx");
        assert_eq!(ctx.to_string(), "[文档 #3 week1 quiz.docx]");
        assert_eq!(ctx.stem(), "week1 quiz");
    }
}
