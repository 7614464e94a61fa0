//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **导入作业**：委托 `AssignmentFlow` 读取附件、抽取题目
//! 2. **写出结果**：把非空题目列表写为 `<文件名>.questions.json`
//! 3. **统计输出**：返回本文档的题目数量

use crate::models::assignment::AssignmentDraft;
use crate::models::question::questions_to_json;
use crate::workflow::{AssignmentFlow, ImportCtx};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 单个文档的处理结果
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// 抽取到的题目数量
    pub question_count: usize,
    /// 写出的题目文件（没有题目时为 `None`）
    pub output_path: Option<PathBuf>,
}

/// 处理单个文档
///
/// # 参数
/// - `flow`: 作业导入流程
/// - `ctx`: 导入上下文（索引 + 源文件）
/// - `output_folder`: 题目 JSON 输出目录
pub async fn process_document(
    flow: &AssignmentFlow,
    ctx: &ImportCtx,
    output_folder: &Path,
) -> Result<DocumentReport> {
    info!("{} 开始导入", ctx);

    let draft = AssignmentDraft {
        title: ctx.stem(),
        ..Default::default()
    };
    let assignment = flow
        .import(ctx.import_index as u64, draft, Some(ctx.source()))
        .await
        .with_context(|| format!("{} 导入失败", ctx))?;

    let questions = assignment.questions();
    if questions.is_empty() {
        warn!("{} ⚠️ 没有识别到题目，作业将转为人工批改", ctx);
        return Ok(DocumentReport {
            question_count: 0,
            output_path: None,
        });
    }

    tokio::fs::create_dir_all(output_folder)
        .await
        .with_context(|| format!("无法创建输出目录: {}", output_folder.display()))?;

    let output_path = output_folder.join(format!("{}.questions.json", ctx.stem()));
    let json = questions_to_json(questions)?;
    tokio::fs::write(&output_path, json)
        .await
        .with_context(|| format!("无法写入文件: {}", output_path.display()))?;

    info!(
        "{} ✅ 导入完成: {} 道题目 → {}",
        ctx,
        questions.len(),
        output_path.display()
    );

    Ok(DocumentReport {
        question_count: questions.len(),
        output_path: Some(output_path),
    })
}
