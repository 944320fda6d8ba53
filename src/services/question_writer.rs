//! 题目写入服务 - 业务能力层
//!
//! 只负责"把一个科目的题目写成文件"，每次写入整体覆盖旧文件

use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionUnit;
use crate::models::subject::Subject;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 题目写入服务
pub struct QuestionWriter {
    output_dir: PathBuf,
    extension: String,
}

impl QuestionWriter {
    /// 创建新的写入服务，输出为 JSON
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(output_dir, "json")
    }

    /// 使用自定义扩展名创建
    pub fn with_extension(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    /// 科目对应的输出路径：`<Subject_With_Underscores>_questions.<ext>`
    pub fn output_path(&self, subject: Subject) -> PathBuf {
        self.output_dir.join(format!(
            "{}_questions.{}",
            subject.file_stem(),
            self.extension.trim_start_matches('.')
        ))
    }

    /// 写入一个科目的全部题目
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, subject: Subject, questions: &[QuestionUnit]) -> AppResult<PathBuf> {
        let path = self.output_path(subject);
        let path_str = path.display().to_string();

        debug!(
            "写入题目: 科目 {} | 题目数 {} | 文件 {}",
            subject,
            questions.len(),
            path_str
        );

        let json = serde_json::to_string_pretty(questions).map_err(|source| {
            FileError::SerializeFailed {
                path: path_str.clone(),
                source,
            }
        })?;

        fs::write(&path, json)
            .await
            .map_err(|source| AppError::write_failed(path_str, source))?;

        Ok(path)
    }
}
