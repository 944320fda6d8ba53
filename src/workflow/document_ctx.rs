//! 文档处理上下文
//!
//! 封装"我正在处理第几份文档、它属于哪个科目"这一信息

use crate::models::subject::Subject;
use std::fmt::Display;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 文档总数
    pub total_documents: usize,

    /// 文件名
    pub file_name: String,

    /// 根据文件名判断的科目
    pub subject: Subject,
}

impl DocumentCtx {
    /// 创建新的文档上下文
    pub fn new(
        document_index: usize,
        total_documents: usize,
        file_name: String,
        subject: Subject,
    ) -> Self {
        Self {
            document_index,
            total_documents,
            file_name,
            subject,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 {}/{}]",
            self.document_index, self.total_documents
        )
    }
}
