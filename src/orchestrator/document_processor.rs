//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单份试卷文档，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **过滤**：按配置跳过评分说明文件
//! 2. **加载**：读取并解码文档（失败只影响本文档）
//! 3. **科目判断**：根据文件名确定科目
//! 4. **流程调度**：委托 `DocumentFlow` 切分题目

use crate::config::Config;
use crate::error::DocumentError;
use crate::models::loaders::DocumentLoader;
use crate::models::question::QuestionUnit;
use crate::models::subject::Subject;
use crate::services::subject_router;
use crate::workflow::{DocumentCtx, DocumentFlow};
use std::path::Path;
use tracing::{error, info, warn};

/// 单份文档的处理结果
#[derive(Debug)]
pub enum DocumentOutcome {
    /// 成功切分
    Extracted {
        subject: Subject,
        questions: Vec<QuestionUnit>,
    },
    /// 按配置跳过
    Skipped { file_name: String },
    /// 读取或解码失败，不贡献任何题目
    Failed(DocumentError),
}

/// 处理单个文档
///
/// # 参数
/// - `loader`: 文档加载器
/// - `flow`: 文档处理流程
/// - `path`: 文档路径
/// - `document_index`: 文档索引（用于日志）
/// - `total_documents`: 文档总数
/// - `config`: 配置
pub async fn process_document(
    loader: &DocumentLoader,
    flow: &DocumentFlow,
    path: &Path,
    document_index: usize,
    total_documents: usize,
    config: &Config,
) -> DocumentOutcome {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    info!("\n[文档 {}/{}] {}", document_index, total_documents, "─".repeat(30));
    info!("[文档 {}/{}] 开始处理: {}", document_index, total_documents, file_name);

    if config.skip_marking_instructions && is_marking_instruction(&file_name) {
        info!(
            "[文档 {}/{}] ⏭️ 评分说明文件，跳过",
            document_index, total_documents
        );
        return DocumentOutcome::Skipped { file_name };
    }

    let document = match loader.load(path).await {
        Ok(document) => document,
        Err(e) => {
            error!("[文档 {}/{}] ❌ {}", document_index, total_documents, e);
            return DocumentOutcome::Failed(e);
        }
    };

    let subject = subject_router::classify(&document.file_name);
    if subject == Subject::Unclassified {
        warn!(
            "[文档 {}/{}] ⚠️ 无法从文件名判断科目，归入 {} 待人工复核",
            document_index, total_documents, subject
        );
    }

    let ctx = DocumentCtx::new(
        document_index,
        total_documents,
        document.file_name.clone(),
        subject,
    );
    let questions = flow.run(&document, &ctx);

    DocumentOutcome::Extracted { subject, questions }
}

/// 评分说明文件名中含 `mi_`
fn is_marking_instruction(file_name: &str) -> bool {
    file_name.to_lowercase().contains("mi_")
}
