//! 批量文档导入器 - 编排层
//!
//! ## 职责
//!
//! 本模块是批量导入的入口，负责扫描目录、控制并发、汇总统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、输出启动信息
//! 2. **批量加载**：扫描目录中所有可能携带题目的文档
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的导入结果

use crate::config::Config;
use crate::models::loaders::list_question_sources;
use crate::orchestrator::document_processor;
use crate::utils::logging;
use crate::workflow::{AssignmentFlow, ImportCtx};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: Arc<AssignmentFlow>,
}

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub success: usize,
    pub failed: usize,
    pub questions: usize,
    pub total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    questions: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;
        logging::log_startup(config.max_concurrent_imports);

        let flow = Arc::new(AssignmentFlow::new(&config));
        Ok(Self { config, flow })
    }

    /// 运行批量导入
    ///
    /// `folder` 为空时扫描配置中的作业目录
    pub async fn run(&self, folder: Option<&Path>) -> Result<ImportStats> {
        let folder = folder
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.assignments_dir());

        info!("\n📁 正在扫描待导入的文档: {}", folder.display());
        let sources = list_question_sources(&folder, |name| self.config.is_allowed(name))
            .await
            .with_context(|| format!("无法扫描目录: {}", folder.display()))?;

        if sources.is_empty() {
            warn!("⚠️ 没有找到待导入的文档，程序结束");
            return Ok(ImportStats::default());
        }

        logging::log_sources_loaded(sources.len(), self.batch_size());

        let stats = self.process_all(sources).await?;
        logging::print_final_stats(
            stats.success,
            stats.failed,
            stats.questions,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    fn batch_size(&self) -> usize {
        self.config.max_concurrent_imports.max(1)
    }

    /// 分批处理所有文档
    async fn process_all(&self, sources: Vec<PathBuf>) -> Result<ImportStats> {
        let batch_size = self.batch_size();
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = sources.len();
        let mut stats = ImportStats {
            total,
            ..Default::default()
        };

        for batch_start in (0..total).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total);
            let batch_num = batch_start / batch_size + 1;
            let total_batches = total.div_ceil(batch_size);

            logging::log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

            let result = self
                .process_batch(&sources[batch_start..batch_end], batch_start, semaphore.clone())
                .await?;

            stats.success += result.success;
            stats.failed += result.failed;
            stats.questions += result.questions;

            logging::log_batch_complete(batch_num, result.success, result.success + result.failed);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch: &[PathBuf],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let output_folder = PathBuf::from(&self.config.output_folder);
        let mut handles = Vec::new();

        for (idx, source) in batch.iter().enumerate() {
            let ctx = ImportCtx::new(batch_start + idx + 1, source.clone());
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = self.flow.clone();
            let output_folder = output_folder.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let result =
                    document_processor::process_document(&flow, &ctx, &output_folder).await;
                if let Err(e) = &result {
                    error!("{} ❌ 处理过程中发生错误: {:#}", ctx, e);
                }
                result
            });
            handles.push((batch_start + idx + 1, source.clone(), handle));
        }

        let mut result = BatchResult::default();
        for (import_index, source, handle) in handles {
            let line = match handle.await {
                Ok(Ok(report)) => {
                    result.success += 1;
                    result.questions += report.question_count;
                    format!(
                        "{} | 成功 | {} 道题目",
                        source.display(),
                        report.question_count
                    )
                }
                Ok(Err(e)) => {
                    result.failed += 1;
                    format!("{} | 失败 | {:#}", source.display(), e)
                }
                Err(e) => {
                    error!("[文档 #{}] 任务执行失败: {}", import_index, e);
                    result.failed += 1;
                    format!("{} | 失败 | {}", source.display(), e)
                }
            };
            if let Err(e) = logging::append_log_line(&self.config.output_log_file, &line) {
                warn!("⚠️ 写入日志文件失败: {}", e);
            }
        }

        Ok(result)
    }
}
