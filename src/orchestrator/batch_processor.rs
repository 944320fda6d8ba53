//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次批处理的完整生命周期。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、构建加载器、流程和写入服务
//! 2. **扫描文档**：列出源目录下的全部文档（目录不可用时整体失败）
//! 3. **顺序处理**：逐份委托 document_processor，单份失败不影响其他文档
//! 4. **科目归并**：把逐文档结果折叠为按科目的集合
//! 5. **写入输出**：每个科目一个文件，单个科目写入失败不影响其他科目
//! 6. **全局统计**：输出运行报告
//!
//! ## 设计特点
//!
//! - **单线程顺序执行**：同一时刻只处理一份文档
//! - **无共享可变状态**：归并通过 fold 完成

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::collection::SubjectCollection;
use crate::models::loaders::{DocumentDecoder, DocumentLoader, PdfDecoder};
use crate::models::question::QuestionUnit;
use crate::models::subject::Subject;
use crate::orchestrator::document_processor::{self, DocumentOutcome};
use crate::orchestrator::report::{BatchReport, DocumentFailure, SubjectSummary};
use crate::services::{subject_router, QuestionWriter};
use crate::workflow::DocumentFlow;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    loader: DocumentLoader,
    flow: DocumentFlow,
    writer: QuestionWriter,
}

impl App {
    /// 初始化应用（PDF 解码）
    pub fn initialize(config: Config) -> AppResult<Self> {
        Self::with_decoder(config, Arc::new(PdfDecoder))
    }

    /// 使用自定义解码器初始化
    pub fn with_decoder(config: Config, decoder: Arc<dyn DocumentDecoder>) -> AppResult<Self> {
        config.validate()?;

        let loader = DocumentLoader::with_decoder(decoder, config.document_extension.clone())
            .skip_leading_pages(config.skip_leading_pages);
        let flow = DocumentFlow::new(&config)?;
        let writer =
            QuestionWriter::with_extension(config.output_dir(), config.output_extension.clone());

        log_startup(&config);

        Ok(Self {
            config,
            loader,
            flow,
            writer,
        })
    }

    /// 替换文档处理流程（例如换用其他切分策略）
    pub fn with_flow(mut self, flow: DocumentFlow) -> Self {
        self.flow = flow;
        self
    }

    /// 运行应用主逻辑
    ///
    /// 只有源目录不可用时返回错误，其余失败都记录在报告中
    pub async fn run(&self) -> AppResult<BatchReport> {
        info!("\n📁 正在扫描待处理的文档...");
        let documents = self.loader.list_documents(&self.config.source_dir).await?;

        let mut report = BatchReport::new(self.config.source_dir.clone(), documents.len());

        if documents.is_empty() {
            warn!(
                "⚠️ 目录 {} 中没有找到 .{} 文件",
                self.config.source_dir.display(),
                self.config.document_extension
            );
        } else {
            info!("✓ 找到 {} 个待处理的文档", documents.len());
        }

        // ========== 逐份处理文档 ==========
        let total = documents.len();
        let mut extracted: Vec<(Subject, Vec<QuestionUnit>)> = Vec::new();

        for (index, path) in documents.iter().enumerate() {
            let outcome = document_processor::process_document(
                &self.loader,
                &self.flow,
                path,
                index + 1,
                total,
                &self.config,
            )
            .await;

            match outcome {
                DocumentOutcome::Extracted { subject, questions } => {
                    report.documents_processed += 1;
                    extracted.push((subject, questions));
                }
                DocumentOutcome::Skipped { file_name } => {
                    report.skipped_documents.push(file_name);
                }
                DocumentOutcome::Failed(e) => {
                    report.failed_documents.push(DocumentFailure {
                        file_name: e.file().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        // ========== 按科目归并并写入 ==========
        let document_counts = count_documents(&extracted);
        let collection = subject_router::route(extracted);
        report.subjects = self.write_subjects(&collection, &document_counts).await;

        report.finish();
        print_final_stats(&report);

        if let Some(report_file) = &self.config.report_file {
            if let Err(e) = write_report(&report, report_file).await {
                error!("❌ 运行报告写入失败 ({}): {}", report_file.display(), e);
            }
        }

        Ok(report)
    }

    /// 写入所有科目，单个科目失败不影响其他科目
    async fn write_subjects(
        &self,
        collection: &SubjectCollection,
        document_counts: &[(Subject, usize)],
    ) -> Vec<SubjectSummary> {
        let mut summaries = Vec::new();

        for (subject, questions) in collection.iter() {
            let output_file = self.writer.output_path(subject);
            let documents = document_counts
                .iter()
                .find(|(s, _)| *s == subject)
                .map_or(0, |(_, n)| *n);

            let (written, error) = match self.writer.write(subject, questions).await {
                Ok(path) => {
                    info!(
                        "💾 {}: {} 道题目 → {}",
                        subject,
                        questions.len(),
                        path.display()
                    );
                    (true, None)
                }
                Err(e) => {
                    error!("❌ {} 写入失败: {}", subject, e);
                    (false, Some(e.to_string()))
                }
            };

            summaries.push(SubjectSummary {
                subject,
                documents,
                questions: questions.len(),
                output_file,
                written,
                error,
            });
        }

        summaries
    }
}

/// 每个科目有多少份文档
fn count_documents(extracted: &[(Subject, Vec<QuestionUnit>)]) -> Vec<(Subject, usize)> {
    extracted
        .iter()
        .fold(Vec::<(Subject, usize)>::new(), |mut counts, (subject, _)| {
            match counts.iter_mut().find(|(s, _)| s == subject) {
                Some((_, n)) => *n += 1,
                None => counts.push((*subject, 1)),
            }
            counts
        })
}

async fn write_report(report: &BatchReport, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|source| FileError::SerializeFailed {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json)
        .await
        .map_err(|source| AppError::write_failed(path.display().to_string(), source))?;
    info!("📝 运行报告已保存至: {}", path.display());
    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷题目提取");
    info!("📂 源目录: {}", config.source_dir.display());
    info!("📤 输出目录: {}", config.output_dir().display());
    if config.strip_boilerplate {
        info!("🧹 已启用样板文字清理");
    }
    if config.skip_leading_pages > 0 {
        info!("📄 每份文档跳过前 {} 页", config.skip_leading_pages);
    }
    info!("{}", "=".repeat(60));
}

fn print_final_stats(report: &BatchReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", report.finished_at);
    info!("{}", "=".repeat(60));
    info!(
        "✅ 文档成功: {}/{}",
        report.documents_processed, report.documents_found
    );
    if !report.skipped_documents.is_empty() {
        info!("⏭️ 跳过: {}", report.skipped_documents.len());
    }
    info!("❌ 文档失败: {}", report.failed_documents.len());
    for failure in &report.failed_documents {
        info!("   - {}: {}", failure.file_name, failure.reason);
    }
    info!("📝 题目总数: {}", report.total_questions());
    info!("{}", "─".repeat(60));
    for summary in &report.subjects {
        let status = if summary.written { "✅" } else { "❌" };
        info!(
            "{} {}: {} 份文档, {} 道题目",
            status, summary.subject, summary.documents, summary.questions
        );
    }
    info!("{}", "=".repeat(60));
}
