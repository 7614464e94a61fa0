//! 从 .docx 文档中读取段落文本
//!
//! docx 是一个 zip 压缩包，正文位于 `word/document.xml`，由 `docx-rs` 解析。
//! 只取正文顶层段落中直接属于该段落的文本（包括超链接中的文字），
//! 文本框、图形等嵌入内容里的段落不会拼进外层段落。

use crate::error::{AppError, AppResult, DocumentError};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// docx 段落读取器
pub struct DocxLoader {
    max_content_length: u64,
}

impl DocxLoader {
    pub fn new(max_content_length: u64) -> Self {
        Self { max_content_length }
    }

    /// 读取文档中的所有段落（已去除首尾空白，跳过空段落）
    pub fn load_paragraphs(&self, path: &Path) -> AppResult<Vec<String>> {
        let path_str = path.display().to_string();

        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::file_not_found(path_str.as_str()),
            _ => AppError::file_read_failed(path_str.as_str(), e),
        })?;
        if metadata.len() > self.max_content_length {
            return Err(DocumentError::TooLarge {
                path: path_str,
                size: metadata.len(),
                limit: self.max_content_length,
            }
            .into());
        }

        let bytes =
            std::fs::read(path).map_err(|e| AppError::file_read_failed(path_str.as_str(), e))?;
        ensure_document_body(&bytes, &path_str)?;

        let paragraphs = paragraphs_from_docx(&bytes, &path_str)?;
        debug!("从 {} 读取到 {} 个段落", path_str, paragraphs.len());
        Ok(paragraphs)
    }
}

/// 检查压缩包中是否有正文
fn ensure_document_body(bytes: &[u8], path_str: &str) -> AppResult<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let result = match archive.by_name(DOCUMENT_ENTRY) {
        Ok(_) => Ok(()),
        Err(zip::result::ZipError::FileNotFound) => Err(DocumentError::MissingBody {
            path: path_str.to_string(),
        }
        .into()),
        Err(e) => Err(e.into()),
    };
    result
}

/// 从整个 docx 文件内容中提取段落文本
pub fn paragraphs_from_docx(bytes: &[u8], path_str: &str) -> AppResult<Vec<String>> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| DocumentError::ParseFailed {
        path: path_str.to_string(),
        message: e.to_string(),
    })?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(paragraphs)
}

/// 段落自身的文本
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        // 图形 / 文本框等嵌入内容
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}
