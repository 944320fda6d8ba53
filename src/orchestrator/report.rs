//! 批次运行报告
//!
//! 汇总每份文档和每个科目的处理结果，运行结束时输出

use crate::models::subject::Subject;
use serde::Serialize;
use std::path::PathBuf;

/// 处理失败的文档
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub file_name: String,
    pub reason: String,
}

/// 单个科目的输出结果
#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub subject: Subject,
    /// 归入该科目的文档数（包括没有切出题目的文档）
    pub documents: usize,
    pub questions: usize,
    pub output_file: PathBuf,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 整个批次的运行报告
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub source_dir: PathBuf,
    pub started_at: String,
    pub finished_at: String,
    pub documents_found: usize,
    pub documents_processed: usize,
    pub skipped_documents: Vec<String>,
    pub failed_documents: Vec<DocumentFailure>,
    pub subjects: Vec<SubjectSummary>,
}

impl BatchReport {
    pub fn new(source_dir: PathBuf, documents_found: usize) -> Self {
        Self {
            source_dir,
            started_at: now(),
            finished_at: String::new(),
            documents_found,
            documents_processed: 0,
            skipped_documents: Vec::new(),
            failed_documents: Vec::new(),
            subjects: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = now();
    }

    /// 写入失败的科目
    pub fn failed_subjects(&self) -> impl Iterator<Item = &SubjectSummary> {
        self.subjects.iter().filter(|s| !s.written)
    }

    pub fn total_questions(&self) -> usize {
        self.subjects.iter().map(|s| s.questions).sum()
    }

    /// 是否有文档或科目处理失败
    pub fn has_failures(&self) -> bool {
        !self.failed_documents.is_empty() || self.failed_subjects().next().is_some()
    }
}

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
